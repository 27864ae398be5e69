use clap::Parser;
use dotenv::dotenv;
use prompt_sim::config::SimulatorConfig;
use prompt_sim::error::SimulatorError;
use prompt_sim::report;
use prompt_sim::session::{Command, Session};
use std::io::{self, BufRead, Read, Write};

#[derive(Parser)]
#[command(name = "prompt-sim")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scores a prompt on role, context, task and constraints", long_about = None)]
struct Cli {
    /// Prompt to evaluate (read from stdin when omitted)
    prompt: Option<String>,

    /// Evaluate the built-in example prompt
    #[arg(long, conflicts_with = "prompt")]
    example: bool,

    /// Print the evaluation and response as JSON
    #[arg(long)]
    json: bool,

    /// Print the JSON Schema of the evaluation result and exit
    #[arg(long)]
    schema: bool,

    /// Read prompts line by line (:example, :reset, :history, :quit)
    #[arg(short, long)]
    interactive: bool,

    /// Skip the simulated processing delay
    #[arg(long)]
    no_delay: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    if cli.schema {
        println!("{}", serde_json::to_string_pretty(&report::evaluation_schema()?)?);
        return Ok(());
    }

    let mut config = SimulatorConfig::from_env()?;
    if cli.no_delay {
        config = config.without_delay();
    }
    let mut session = Session::new(config);

    if cli.interactive {
        return Ok(run_interactive(&mut session, cli.json).await?);
    }

    let prompt = match (cli.example, cli.prompt) {
        (true, _) => Session::load_example().to_string(),
        (false, Some(p)) => p,
        (false, None) => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let submission = session.submit(&prompt).await?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(submission)?);
    } else {
        println!("🤖 RESPUESTA SIMULADA");
        println!("--------------------------------------------------");
        println!("{}\n", submission.response);
        println!("📊 EVALUACIÓN");
        println!("--------------------------------------------------");
        println!("{}", report::render_evaluation(&submission.evaluation));
    }

    Ok(())
}

async fn run_interactive(session: &mut Session, json: bool) -> Result<(), SimulatorError> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Escribe un prompt por línea. Comandos: :example, :reset, :history, :quit");
    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let line = line?;

        let prompt = match Command::parse(&line) {
            Command::Quit => break,
            Command::Reset => {
                session.reset();
                println!("Formulario reiniciado");
                continue;
            }
            Command::History => {
                println!("{}", report::render_history(session.history()));
                continue;
            }
            Command::Example => {
                let example = Session::load_example();
                println!("{example}\n");
                example.to_string()
            }
            Command::Prompt(text) => text,
        };

        match session.submit(&prompt).await {
            Ok(submission) if json => println!("{}", serde_json::to_string(submission)?),
            Ok(submission) => {
                println!("{}\n", submission.response);
                println!("{}\n", report::render_evaluation(&submission.evaluation));
            }
            Err(SimulatorError::EmptyPrompt) => eprintln!("⚠️  {}", SimulatorError::EmptyPrompt),
            Err(e) => return Err(e),
        }
    }

    Ok(())
}
