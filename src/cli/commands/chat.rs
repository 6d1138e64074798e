use anyhow::Result;
use inquire::Select;

use crate::chat::{ChatSession, LineReader, SessionConfig};
use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::gateway::HttpGateway;
use crate::models::{self, AVAILABLE_MODELS, DEFAULT_MODEL};
use crate::ui::{Style, handle_prompt_cancellation};

pub struct ChatOptions {
    pub endpoint: Option<String>,
    pub model: Option<String>,
    pub stream: bool,
}

pub async fn run_chat(options: ChatOptions) -> Result<()> {
    let manager = ConfigManager::new()?;
    let file_config = manager.load_or_default();

    let resolve_options = ResolveOptions {
        endpoint: options.endpoint,
        model: options.model,
        stream: options.stream,
    };
    let resolved = resolve_config(&resolve_options, &file_config)?;

    if let Some(model) = &resolved.model
        && !models::is_known_model(model)
    {
        warn_unknown_model(model);
    }

    let mut reader = LineReader::from_stdin();

    let model = match resolved.model {
        Some(model) => model,
        None => match select_model(&mut reader)? {
            Some(model) => model,
            None => return Ok(()),
        },
    };

    println!("{} Using {}\n", Style::success("✓"), Style::value(&model));

    let gateway = HttpGateway::new(resolved.endpoint.clone(), resolved.api_key);
    let config = SessionConfig {
        endpoint: resolved.endpoint,
        model,
        mode: resolved.mode,
        stream: resolved.stream,
        save_dir: resolved.save_dir,
    };

    let mut session = ChatSession::new(config, gateway);
    session.run(&mut reader).await
}

fn warn_unknown_model(model: &str) {
    tracing::debug!(model, "configured model is not in the offered set");
    eprintln!(
        "{} Model '{}' is not one of the offered models\n\
         Offered models: {}\n\
         Proceeding anyway...\n",
        Style::warning("Warning:"),
        model,
        AVAILABLE_MODELS
            .iter()
            .map(|(name, _)| *name)
            .collect::<Vec<_>>()
            .join(", ")
    );
}

/// Asks which model to use.
///
/// On a terminal this is a menu; otherwise the next input line is read as
/// the choice. Returns `None` if the user cancels the menu.
fn select_model(reader: &mut LineReader) -> Result<Option<String>> {
    if !reader.is_interactive() {
        models::print_models();
        let choice = reader.read_line()?.unwrap_or_default();
        return Ok(Some(models::model_for_choice(&choice).to_string()));
    }

    handle_prompt_cancellation(|| {
        let options: Vec<String> = AVAILABLE_MODELS
            .iter()
            .map(|(name, description)| format!("{name} - {description}"))
            .collect();

        let selection = Select::new("Choose a model:", options).prompt()?;

        // Extract name from "name - description" format
        let name = selection.split(" - ").next().unwrap_or(DEFAULT_MODEL);
        Ok(name.to_string())
    })
}
