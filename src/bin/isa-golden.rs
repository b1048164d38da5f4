extern crate clap;

use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use isa_golden::config::Config;
use isa_golden::executor::Backend;
use isa_golden::report::Summary;
use isa_golden::{suites, vectors, Result};
use std::path::Path;

fn file_exists(path: String) -> std::result::Result<(), String> {
    if Path::new(path.as_str()).exists() {
        Ok(())
    } else {
        Err(format!("{} not exists!", path))
    }
}

fn report(summaries: &[Summary]) -> i32 {
    for s in summaries {
        println!("{:<16} passed {:>5}  failed {:>5}  skipped {:>5}", s.suite, s.passed, s.failed, s.skipped);
    }
    suites::exit_code(summaries)
}

fn run(matches: &ArgMatches) -> Result<i32> {
    let mut config = match matches.value_of("config") {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(backend) = matches.value_of("backend").and_then(Backend::from_name) {
        config.backend = backend;
    }
    if matches.is_present("stop_on_fail") {
        config.stop_on_fail = true;
    }

    match matches.subcommand() {
        ("list", _) => {
            for name in suites::names() {
                println!("{}", name);
            }
            Ok(0)
        }
        ("run", Some(sub)) => {
            if let Some(names) = sub.values_of("suite") {
                config.suites = names.map(|n| n.to_string()).collect();
            }
            let executor = config.executor();
            log::info!("running on {} backend", executor.name());
            let summaries = suites::run_suites(&config.suites, executor.as_ref(), config.stop_on_fail)?;
            Ok(report(&summaries))
        }
        ("check", Some(sub)) => {
            let path = sub.value_of("vectors").unwrap_or_default();
            let cases = vectors::load(path)?;
            let executor = config.executor();
            let summary = vectors::check(path, &cases, executor.as_ref());
            Ok(report(&[summary]))
        }
        _ => Ok(0)
    }
}

fn main() {
    let matches = App::new("isa-golden")
        .version("0.1")
        .about("bit-exact golden models for DSP, vector and float instructions")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(Arg::with_name("backend")
            .short("b")
            .long("backend")
            .value_name("BACKEND")
            .takes_value(true)
            .help("executor under test, soft or host")
            .validator(|raw| {
                match raw.as_str() {
                    "soft" | "host" => Ok(()),
                    _ => Err(String::from("--backend soft or host"))
                }
            })
        )
        .arg(Arg::with_name("config")
            .short("c")
            .long("config")
            .value_name("CONFIG_FILE")
            .takes_value(true)
            .validator(file_exists)
            .help("json config file")
        )
        .arg(Arg::with_name("stop_on_fail")
            .long("stop_on_fail")
            .help("stop after the first failing suite")
        )
        .arg(Arg::with_name("verbose")
            .short("v")
            .multiple(true)
            .help("-v debug, -vv trace")
        )
        .subcommand(SubCommand::with_name("list")
            .about("list registered suites")
        )
        .subcommand(SubCommand::with_name("run")
            .about("run golden suites, all of them when none is named")
            .arg(Arg::with_name("suite")
                .index(1)
                .multiple(true)
                .value_name("SUITE")
            )
        )
        .subcommand(SubCommand::with_name("check")
            .about("check a json vector file")
            .arg(Arg::with_name("vectors")
                .index(1)
                .required(true)
                .value_name("VECTORS_FILE")
                .validator(file_exists)
                .help("vector file path")
            )
        )
        .get_matches();

    let level = match matches.occurrences_of("verbose") {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let code = match run(&matches) {
        Ok(code) => code,
        Err(e) => {
            log::error!("{}", e);
            2
        }
    };
    std::process::exit(code)
}
