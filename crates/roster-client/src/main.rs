//! `roster`: terminal front-end for the roster user API.
//!
//! Every mutation goes through the same form validation and
//! invalidate-and-reload flow as a graphical client would use.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};
use roster_client::{
    DeleteOutcome, FieldName, HttpUsersClient, SubmitOutcome, UserForm, UserListView,
    UsersGateway, descriptor, write_table,
};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_API_URL: &str = "http://localhost:10000";

#[derive(Debug, Parser)]
#[command(name = "roster", version, about = "Manage roster users from the terminal")]
struct Cli {
    /// Base URL of the roster API.
    #[arg(long, env = "ROSTER_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show users, optionally filtered by a search query.
    List {
        /// Case-insensitive match against names, email, and phone.
        #[arg(long, short)]
        search: Option<String>,
    },
    /// Create a user.
    Add(FieldArgs),
    /// Change fields of an existing user.
    Edit {
        /// Identifier of the user to edit.
        id: u64,
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Delete a user after confirmation.
    Delete {
        /// Identifier of the user to delete.
        id: u64,
        /// Skip the confirmation prompt.
        #[arg(long, short)]
        yes: bool,
    },
}

#[derive(Debug, Default, Args)]
struct FieldArgs {
    /// First name.
    #[arg(long)]
    first_name: Option<String>,
    /// Last name.
    #[arg(long)]
    last_name: Option<String>,
    /// Ten digit mobile number.
    #[arg(long)]
    phone_number: Option<String>,
    /// Email address.
    #[arg(long)]
    email_address: Option<String>,
}

impl FieldArgs {
    fn supplied(&self) -> impl Iterator<Item = (FieldName, &str)> {
        [
            (FieldName::FirstName, self.first_name.as_deref()),
            (FieldName::LastName, self.last_name.as_deref()),
            (FieldName::PhoneNumber, self.phone_number.as_deref()),
            (FieldName::EmailAddress, self.email_address.as_deref()),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
    }
}

/// Terminal streams used by a command.
struct Terminal<'a, R, W, E> {
    input: &'a mut R,
    out: &'a mut W,
    err: &'a mut E,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .compact()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let cli = Cli::parse();
    let client = HttpUsersClient::new(&cli.api_url).wrap_err("failed to configure API client")?;
    let mut terminal = Terminal {
        input: &mut io::stdin().lock(),
        out: &mut io::stdout().lock(),
        err: &mut io::stderr().lock(),
    };
    run(cli.command, &client, &mut terminal)
        .await
        .wrap_err("failed to write command output")
}

async fn run<G, R, W, E>(
    command: Command,
    gateway: &G,
    terminal: &mut Terminal<'_, R, W, E>,
) -> io::Result<ExitCode>
where
    G: UsersGateway,
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut view = UserListView::new();
    match command {
        Command::List { search } => {
            if !reload(&mut view, gateway, terminal).await? {
                return Ok(ExitCode::FAILURE);
            }
            let searching = search.as_deref().is_some_and(|query| !query.is_empty());
            view.set_query(search.unwrap_or_default());
            write_table(terminal.out, &view.visible(), searching)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Add(fields) => {
            let mut form = UserForm::create();
            apply(&mut form, &fields);
            save(form, &mut view, gateway, terminal).await
        }
        Command::Edit { id, fields } => {
            if !reload(&mut view, gateway, terminal).await? {
                return Ok(ExitCode::FAILURE);
            }
            let Some(record) = view.find(id) else {
                writeln!(terminal.err, "No user with id {id}")?;
                return Ok(ExitCode::FAILURE);
            };
            let mut form = UserForm::edit(record);
            apply(&mut form, &fields);
            save(form, &mut view, gateway, terminal).await
        }
        Command::Delete { id, yes } => delete(id, yes, &mut view, gateway, terminal).await,
    }
}

fn apply(form: &mut UserForm, fields: &FieldArgs) {
    for (field, value) in fields.supplied() {
        form.change(field, value);
    }
}

async fn reload<G, R, W, E>(
    view: &mut UserListView,
    gateway: &G,
    terminal: &mut Terminal<'_, R, W, E>,
) -> io::Result<bool>
where
    G: UsersGateway,
    E: Write,
{
    let loaded = view.reload(gateway).await;
    if let Some(banner) = view.error() {
        writeln!(terminal.err, "{banner}")?;
    }
    Ok(loaded)
}

async fn save<G, R, W, E>(
    mut form: UserForm,
    view: &mut UserListView,
    gateway: &G,
    terminal: &mut Terminal<'_, R, W, E>,
) -> io::Result<ExitCode>
where
    G: UsersGateway,
    W: Write,
    E: Write,
{
    let refreshed = &mut *view;
    let outcome = form
        .submit(gateway, move || async move {
            refreshed.reload(gateway).await;
        })
        .await;

    match outcome {
        SubmitOutcome::Invalid => {
            writeln!(terminal.err, "{}: please fix the following", form.mode().title())?;
            for (field, message) in form.errors().iter() {
                let label = descriptor(field).map_or(field.as_str(), |d| d.label);
                writeln!(terminal.err, "  {label}: {message}")?;
            }
            Ok(ExitCode::FAILURE)
        }
        SubmitOutcome::Failed(alert) => {
            writeln!(terminal.err, "{alert}")?;
            Ok(ExitCode::FAILURE)
        }
        SubmitOutcome::Saved(record) => {
            match record {
                Some(user) => writeln!(terminal.out, "Saved user {}", user.id)?,
                None => writeln!(terminal.out, "User no longer exists; nothing was changed")?,
            }
            if let Some(banner) = view.error() {
                writeln!(terminal.err, "{banner}")?;
            }
            write_table(terminal.out, &view.visible(), false)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn delete<G, R, W, E>(
    id: u64,
    yes: bool,
    view: &mut UserListView,
    gateway: &G,
    terminal: &mut Terminal<'_, R, W, E>,
) -> io::Result<ExitCode>
where
    G: UsersGateway,
    R: BufRead,
    W: Write,
    E: Write,
{
    if !reload(view, gateway, terminal).await? {
        return Ok(ExitCode::FAILURE);
    }
    let Some(target) = view.request_delete(id) else {
        writeln!(terminal.err, "No user with id {id}")?;
        return Ok(ExitCode::FAILURE);
    };
    if !yes {
        write!(
            terminal.out,
            "Delete {} ({})? Are you sure you want to delete this user? [y/N] ",
            target.full_name(),
            target.email_address.as_deref().unwrap_or("no email")
        )?;
        terminal.out.flush()?;
        let mut answer = String::new();
        terminal.input.read_line(&mut answer)?;
        if !matches!(answer.trim(), "y" | "Y" | "yes") {
            view.cancel_delete();
            writeln!(terminal.out, "Cancelled")?;
            return Ok(ExitCode::SUCCESS);
        }
    }

    match view.confirm_delete(gateway).await {
        DeleteOutcome::Deleted(deleted) => {
            writeln!(terminal.out, "Deleted user {deleted}")?;
            write_table(terminal.out, &view.visible(), false)?;
            Ok(ExitCode::SUCCESS)
        }
        DeleteOutcome::Failed(alert) => {
            writeln!(terminal.err, "{alert}")?;
            Ok(ExitCode::FAILURE)
        }
        DeleteOutcome::NothingPending => Ok(ExitCode::FAILURE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn parses_add_field_flags() {
        let cli = Cli::try_parse_from([
            "roster",
            "add",
            "--first-name",
            "Ada",
            "--email-address",
            "ada@example.com",
        ])
        .expect("valid arguments");
        let Command::Add(fields) = cli.command else {
            panic!("expected add command");
        };
        let supplied: Vec<(FieldName, &str)> = fields.supplied().collect();
        assert_eq!(
            supplied,
            vec![
                (FieldName::FirstName, "Ada"),
                (FieldName::EmailAddress, "ada@example.com"),
            ]
        );
    }

    #[rstest]
    fn api_url_defaults_to_local_service() {
        let cli = Cli::try_parse_from(["roster", "list"]).expect("valid arguments");
        if std::env::var_os("ROSTER_API_URL").is_none() {
            assert_eq!(cli.api_url, DEFAULT_API_URL);
        }
    }

    #[rstest]
    #[case(&["roster", "delete", "3", "--yes"], 3, true)]
    #[case(&["roster", "delete", "8"], 8, false)]
    fn parses_delete(#[case] args: &[&str], #[case] expected_id: u64, #[case] expected_yes: bool) {
        let cli = Cli::try_parse_from(args).expect("valid arguments");
        assert!(matches!(
            cli.command,
            Command::Delete { id, yes } if id == expected_id && yes == expected_yes
        ));
    }

    #[rstest]
    fn rejects_non_numeric_ids() {
        assert!(Cli::try_parse_from(["roster", "edit", "abc"]).is_err());
    }
}
