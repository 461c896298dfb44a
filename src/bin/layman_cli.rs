// Terminal front-end: same state machine as the GUI, cards printed to stdout.
use clap::Parser;
use layman_learn::client::config::ClientConfig;
use layman_learn::client::models::app_state::{Effect, ExplainerState};
use layman_learn::client::models::cards::render_cards;
use layman_learn::client::models::messages::Message;
use layman_learn::client::services::explain_service::{fetch_explanation, ExplainService};
use tokio::io::{stdin, AsyncBufReadExt, BufReader};

#[derive(Parser, Debug)]
#[command(name = "layman-cli")]
#[command(about = "Explain a topic from the terminal")]
struct Args {
    /// Endpoint URL (overrides LAYMAN_ENDPOINT)
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Topic to explain; omit to read topics line by line from stdin
    topic: Vec<String>,
}

async fn explain(state: &mut ExplainerState, service: &ExplainService, topic: String) {
    state.update(Message::TopicChanged(topic));
    let Effect::Fetch { topic } = state.update(Message::Submit) else {
        return;
    };
    let outcome = fetch_explanation(service.clone(), topic).await;
    state.update(outcome);

    if let Some(result) = &state.result {
        for card in render_cards(result) {
            println!("== {} ==", card.title);
            println!("{}\n", card.body);
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    layman_learn::utils::logger::init("warn");
    let args = Args::parse();

    let mut config = ClientConfig::from_env()?;
    if let Some(endpoint) = &args.endpoint {
        config.set_endpoint(endpoint)?;
    }
    let service = ExplainService::new(&config)?;
    let mut state = ExplainerState::new(config.initial_theme);

    if !args.topic.is_empty() {
        explain(&mut state, &service, args.topic.join(" ")).await;
        return Ok(());
    }

    println!("[CLI] Type a topic and press Enter (empty line to skip, Ctrl-D to quit):");
    let mut lines = BufReader::new(stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        explain(&mut state, &service, line.trim().to_string()).await;
    }
    Ok(())
}
