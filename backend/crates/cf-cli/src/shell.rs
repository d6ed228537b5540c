//! Line-oriented session: one process, one signed-in user at a time.

use crate::{
    App, CliError, CliResult, ShellCommand,
    output::{collection_line, navigation_line, project_line, session_line, state_line},
    shell_command::HELP,
};

use cf_auth::{GuardDecision, ImageUpload, LANDING_PATH, RouteGuard};

use std::io::Write;
use std::path::Path;

use log::debug;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

pub const PROMPT: &str = "cf> ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell<'a> {
    app: &'a App,
    location: String,
}

impl<'a> Shell<'a> {
    /// Starts on the role dashboard when a session was restored.
    pub fn new(app: &'a App) -> Self {
        let location = app
            .store
            .current()
            .role()
            .map(|role| role.dashboard_path())
            .unwrap_or(LANDING_PATH)
            .to_string();
        Self { app, location }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Read commands until `quit` or end of input.
    ///
    /// Auth and usage errors are printed and the loop goes on; anything else
    /// ends the session.
    pub async fn run<R, W>(&mut self, input: R, out: &mut W) -> CliResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut lines = input.lines();
        loop {
            write!(out, "{PROMPT}")?;
            out.flush()?;

            let Some(line) = lines.next_line().await? else {
                writeln!(out)?;
                return Ok(());
            };

            let flow = match ShellCommand::parse(&line) {
                Ok(Some(command)) => self.execute(command, out).await,
                Ok(None) => Ok(Flow::Continue),
                Err(e) => Err(e),
            };

            match flow {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => return Ok(()),
                Err(e) if e.is_recoverable() => {
                    debug!("Shell command failed: {e}");
                    writeln!(out, "error: {}", e.user_message())?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Run one command, then re-check the current location against the
    /// session it left behind.
    pub async fn execute<W: Write>(&mut self, command: ShellCommand, out: &mut W) -> CliResult<Flow> {
        let result = self.dispatch(command, out).await;

        if let GuardDecision::Redirect(to) =
            RouteGuard::navigate(&self.app.store.current(), &self.location)
        {
            debug!("Leaving {} for {to}", self.location);
            self.location = to.to_string();
        }

        result
    }

    async fn dispatch<W: Write>(&mut self, command: ShellCommand, out: &mut W) -> CliResult<Flow> {
        let store = &self.app.store;
        let workspace = &self.app.workspace;

        match command {
            ShellCommand::SignUp {
                email,
                password,
                role,
            } => {
                let session = store.sign_up(&email, &password, role).await?;
                self.location = session.role.dashboard_path().to_string();
                writeln!(out, "signed up {}", session_line(&session))?;
                writeln!(out, "at {}", self.location)?;
            }
            ShellCommand::SignIn {
                email,
                password,
                role,
            } => {
                let session = store.sign_in(&email, &password, role).await?;
                self.location = session.role.dashboard_path().to_string();
                writeln!(out, "signed in {}", session_line(&session))?;
                writeln!(out, "at {}", self.location)?;
            }
            ShellCommand::SignOut => {
                self.location = LANDING_PATH.to_string();
                let remote = store.sign_out().await;
                writeln!(out, "signed out")?;
                remote?;
            }
            ShellCommand::WhoAmI => {
                writeln!(out, "{}", state_line(&store.current()))?;
                writeln!(out, "at {}", self.location)?;
            }
            ShellCommand::Goto { path } => {
                let decision = RouteGuard::navigate(&store.current(), &path);
                self.location = match decision {
                    GuardDecision::Render => path.clone(),
                    GuardDecision::Redirect(to) => to.to_string(),
                };
                writeln!(out, "{}", navigation_line(&path, decision))?;
            }
            ShellCommand::Projects => {
                let projects = workspace.list_projects().await?;
                if projects.is_empty() {
                    writeln!(out, "no projects")?;
                }
                for project in &projects {
                    writeln!(out, "{}", project_line(project))?;
                }
            }
            ShellCommand::ProjectCreate { draft } => {
                let project = workspace.save_project(&store.current(), draft).await?;
                writeln!(out, "saved {}", project_line(&project))?;
            }
            ShellCommand::CollectionCreate { draft, image } => {
                let image = match image {
                    Some(path) => Some(read_image(&path).await?),
                    None => None,
                };
                let collection = workspace
                    .create_collection(&store.current(), draft, image)
                    .await?;
                writeln!(out, "created {}", collection_line(&collection))?;
            }
            ShellCommand::Collections => {
                let collections = workspace.list_collections(&store.current()).await?;
                if collections.is_empty() {
                    writeln!(out, "no collections")?;
                }
                for collection in &collections {
                    writeln!(out, "{}", collection_line(collection))?;
                }
            }
            ShellCommand::Help => writeln!(out, "{HELP}")?,
            ShellCommand::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }
}

async fn read_image(path: &Path) -> CliResult<ImageUpload> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| CliError::usage(format!("cannot read {}: {e}", path.display())))?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| CliError::usage(format!("{} is not a file", path.display())))?;

    Ok(ImageUpload {
        content_type: content_type_for(path).to_string(),
        file_name,
        bytes,
    })
}

pub fn content_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}
