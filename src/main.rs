use chrono::Local;
use clap::Parser;
use morning_routine::application::RoutineService;
use morning_routine::cli::{format_checklist, Cli, Commands};
use morning_routine::error::RoutineError;
use morning_routine::infrastructure::{init_tracing, Config, TerminalSession};
use morning_routine::ui::{self, App};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref());

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            let code = match e.downcast_ref::<RoutineError>() {
                Some(err) => {
                    eprintln!("Error: {}", err.display_with_suggestions());
                    err.exit_code()
                }
                None => {
                    eprintln!("Error: {:#}", e);
                    1
                }
            };
            tracing::error!("{:#}", e);
            std::process::exit(code);
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::resolve(cli.config.as_deref())?;
    let service = RoutineService::new(config, cli.seed);

    match cli.command {
        Some(Commands::Checklist) => {
            print!("{}", format_checklist(&service.checklist()));
            Ok(())
        }
        Some(Commands::Affirmation) => {
            println!("{}", service.affirmation()?);
            Ok(())
        }
        None => {
            let routine = service.start()?;
            let mut app = App::new(
                routine,
                service.config().title.clone(),
                Local::now().date_naive(),
            );

            let mut session = TerminalSession::new()?;
            ui::run(&mut session.terminal, &mut app)
        }
    }
}
