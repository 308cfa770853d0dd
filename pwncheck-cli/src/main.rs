use eyre::WrapErr;

use pwncheck::{strength_score, CancellationToken, Checker, Config};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use tracing::{error, metadata::LevelFilter};
use tracing_subscriber::EnvFilter;

fn setup_logger() -> eyre::Result<()> {
    let filter = EnvFilter::from_default_env()
        // Set the base level when not matched by other directives to WARN.
        .add_directive(LevelFilter::WARN.into())
        .add_directive("pwncheck=debug".parse()?)
        .add_directive("pwncheck_cli=debug".parse()?);

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(filter)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .wrap_err("setting default subscriber failed")?;

    Ok(())
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    setup_logger()?;

    let rt = tokio::runtime::Builder::new_current_thread().enable_all().build()?;

    let checker = Checker::new(Config {
        user_agent: "pwncheck-cli".to_owned(),
        add_padding: true,
        ..Config::default()
    })?;
    let cancel = CancellationToken::new();

    let mut rl = DefaultEditor::new()?;
    if rl.load_history("history.txt").is_err() {
        println!("No previous history.");
    }
    loop {
        let readline = rl.readline(">> ");
        match readline {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                match *line.split_ascii_whitespace().collect::<Vec<_>>().as_slice() {
                    ["check", password] => {
                        match rt.block_on(checker.evaluate(&cancel, password)) {
                            Ok(evaluation) => {
                                println!(
                                    "breaches: {}  allowed: {}  strength: {}/4",
                                    evaluation.breach_count,
                                    evaluation.allowed,
                                    strength_score(password, &[])
                                );
                                println!("{}", evaluation.notes);
                            }
                            Err(e) => {
                                error!("{}", e);
                            }
                        };
                    }
                    ["validate", password] => {
                        match rt.block_on(checker.validate(&cancel, password)) {
                            Ok(()) => {
                                println!("ok");
                            }
                            Err(e) => {
                                error!("{}", e);
                            }
                        };
                    }
                    _ => {
                        tracing::error!("usage: check <password> | validate <password>");
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    rl.save_history("history.txt")?;
    Ok(())
}
