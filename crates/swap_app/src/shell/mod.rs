pub mod commands;
pub mod logging;
pub mod render;

use std::io::{self, BufRead, Write};

use swap_core::Destination;
use swap_engine::{MarketClient, Navigator};
use swap_logging::swap_info;

use commands::{Command, HELP};

/// Prints route changes instead of switching views.
pub struct PrintNavigator;

impl Navigator for PrintNavigator {
    fn navigate(&self, destination: Destination) {
        println!("-> {}", destination.path());
    }
}

/// Reads commands from stdin until `quit` or end of input.
pub async fn run(client: &MarketClient) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    println!("BoilerSwap shell; type `help` for commands.");

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let command = match commands::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                println!("{message}");
                continue;
            }
        };
        if command == Command::Quit {
            break;
        }
        execute(client, command).await;

        if client.consume_dirty() {
            for line in render::status_lines(&client.view()) {
                println!("{line}");
            }
        }
    }

    swap_info!("shell exited");
    Ok(())
}

async fn execute(client: &MarketClient, command: Command) {
    match command {
        Command::Login { email, password } => client.login(&email, &password).await,
        Command::Signup {
            email,
            password,
            confirm,
        } => client.signup(&email, &password, &confirm).await,
        Command::Forgot { email } => client.forgot(&email).await,
        Command::Verify { code } => client.verify(&code).await,
        Command::VerifyForgot { code } => client.verify_forgot(&code).await,
        Command::Update { password } => client.update_password(&password).await,
        Command::SignOut => {
            if let Err(err) = client.sign_out().await {
                println!("sign out failed: {err}");
            }
        }
        Command::Query(text) => client.set_query(&text),
        Command::FilterType(value) => client.set_item_type_filter(value),
        Command::FilterLocation(value) => client.set_location_filter(value),
        Command::FilterCondition(value) => client.set_condition_filter(value),
        Command::Search => {
            if let Err(err) = client.run_search().await {
                println!("search failed: {err}");
            }
        }
        Command::Preview => print_lines(render::item_lines(&client.preview())),
        Command::Browse => print_lines(render::item_lines(&client.browse())),
        Command::List(draft) => client.submit_listing(draft).await,
        Command::Status => print_lines(render::status_lines(&client.view())),
        Command::Help => println!("{HELP}"),
        Command::Quit => {}
    }
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{line}");
    }
}
