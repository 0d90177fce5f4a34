use clap::Parser;
use std::process;
use traefik_validate::{
    cli::Cli,
    handlers::{ValidateOptions, handle_list_rules, handle_validate},
};

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run() -> traefik_validate::Result<bool> {
    let cli = Cli::parse();

    // Initialize logging
    cli.init_logging();

    if cli.list_rules {
        print!("{}", handle_list_rules());
        return Ok(true);
    }

    let Some(directory) = cli.directory else {
        return Ok(false);
    };

    handle_validate(ValidateOptions {
        directory,
        auto_correct: cli.auto_correct,
        dry_run: cli.dry_run,
        skip_lint: cli.skip_lint,
        format: cli.format.map(Into::into),
        strict: cli.strict,
        no_color: cli.no_color,
        config: cli.config,
    })
}
