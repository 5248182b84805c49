//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `projboard_core` linkage without a host UI.
//! - Drive the form and both lists end to end from argument triples.
//!
//! Usage: `projboard-cli [TITLE DESCRIPTION PEOPLE]...`
//!
//! Env:
//! - `PROJBOARD_LOG_DIR`: absolute directory; file logging is off when unset.
//! - `PROJBOARD_LOG_LEVEL`: defaults to `default_log_level()`.

use projboard_core::{
    default_log_level, init_logging, FormInput, ProjectForm, ProjectList, ProjectStatus,
    ProjectStore,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Why: smoke scripts grep these two lines to confirm core linkage.
    println!("projboard_core ping={}", projboard_core::ping());
    println!("projboard_core version={}", projboard_core::core_version());

    if let Ok(log_dir) = std::env::var("PROJBOARD_LOG_DIR") {
        let level = std::env::var("PROJBOARD_LOG_LEVEL")
            .unwrap_or_else(|_| default_log_level().to_string());
        if let Err(err) = init_logging(&level, &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() % 3 != 0 {
        eprintln!("usage: projboard-cli [TITLE DESCRIPTION PEOPLE]...");
        return ExitCode::from(2);
    }

    let store = ProjectStore::instance();
    let lists = [ProjectStatus::Active, ProjectStatus::Finished]
        .into_iter()
        .map(|status| ProjectList::attach(&store, status))
        .collect::<Result<Vec<_>, _>>();
    let lists = match lists {
        Ok(lists) => lists,
        Err(err) => {
            eprintln!("failed to attach lists: {err}");
            return ExitCode::FAILURE;
        }
    };

    let form = ProjectForm::new(&store);
    for triple in args.chunks(3) {
        let input = FormInput::new(triple[0].as_str(), triple[1].as_str(), triple[2].as_str());
        match form.submit(&input) {
            Ok(id) => println!("added {id}"),
            Err(err) => println!("rejected `{}`: {err}", input.title),
        }
    }

    for list in &lists {
        println!();
        println!("{}", list.heading());
        for item in list.items() {
            println!("- {} ({})", item.title, item.people_label);
            println!("  {}", item.description);
        }
    }
    ExitCode::SUCCESS
}
