mod api;
mod commands;
mod config;
mod consts;
mod environment;
mod events;
mod logging;
mod session;
mod ui;

use crate::api::StudentClient;
use crate::api::models::CreateStudentInput;
use crate::config::{Config, get_config_path};
use crate::environment::Environment;
use crate::session::run_tui_mode;
use crate::ui::UIConfig;
use clap::{Args as ClapArgs, Parser, Subcommand};
use log::debug;
use std::error::Error;
use std::sync::Arc;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Backend environment to connect to
    #[arg(
        long,
        global = true,
        env = "STUDENT_ADMIN_ENVIRONMENT",
        default_value = "local"
    )]
    environment: Environment,

    /// Base URL of the student API. Overrides the environment and config file.
    #[arg(long, global = true, env = "STUDENT_ADMIN_API_URL", value_name = "URL")]
    api_url: Option<String>,

    /// Command to execute. Defaults to the interactive shell.
    #[command(subcommand)]
    command: Option<Command>,
}

/// Fields of a student record as given on the command line
#[derive(ClapArgs)]
struct StudentFields {
    /// Full name
    #[arg(long)]
    name: String,

    /// Age, between 1 and 100
    #[arg(long, allow_negative_numbers = true)]
    age: i32,

    /// Grade, between 0 and 4
    #[arg(long, allow_negative_numbers = true)]
    grade: f64,
}

impl From<StudentFields> for CreateStudentInput {
    fn from(fields: StudentFields) -> Self {
        CreateStudentInput::new(fields.name, fields.age, fields.grade)
    }
}

#[derive(Subcommand)]
enum Command {
    /// Run the interactive student admin shell
    Tui,
    /// Print all students
    List,
    /// Print a single student
    Show {
        /// ID of the student
        id: String,
    },
    /// Add a new student
    Add {
        #[command(flatten)]
        fields: StudentFields,
    },
    /// Replace the fields of an existing student
    Update {
        /// ID of the student
        id: String,

        #[command(flatten)]
        fields: StudentFields,
    },
    /// Delete a student
    Delete {
        /// ID of the student
        id: String,
    },
    /// Print grade statistics
    Stats,
    /// Save settings to the config file. `--api-url` is stored when given.
    Configure {
        /// Paint a solid background behind the TUI
        #[arg(long, value_name = "BOOL")]
        background_color: Option<bool>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let config_path = get_config_path()?;
    let command = args.command.unwrap_or(Command::Tui);
    if let Command::Configure { background_color } = command {
        return commands::configure(&config_path, args.api_url, background_color).map(|_| ());
    }

    let config = Config::load_or_default(&config_path)
        .map_err(|e| format!("Failed to load config {}: {}", config_path.display(), e))?;

    let api_url = config.resolve_api_url(args.api_url.as_deref(), args.environment);
    let client = Arc::new(StudentClient::new(&api_url));

    if let Command::Tui = command {
        let ui_config = UIConfig::new(config.with_background_color, api_url);
        return run_tui_mode(client, ui_config).await;
    }

    logging::init_stderr_logger()?;
    debug!("Environment {} using {}", args.environment, api_url);
    let api = client.as_ref();
    match command {
        Command::Tui | Command::Configure { .. } => Ok(()),
        Command::List => commands::list_students(api).await.map(|_| ()),
        Command::Show { id } => commands::show_student(api, &id).await.map(|_| ()),
        Command::Add { fields } => commands::add_student(api, fields.into()).await.map(|_| ()),
        Command::Update { id, fields } => commands::update_student(api, &id, fields.into())
            .await
            .map(|_| ()),
        Command::Delete { id } => commands::delete_student(api, &id).await.map(|_| ()),
        Command::Stats => commands::show_statistics(api).await.map(|_| ()),
    }
}
