//! Artifact generation for a resolved controller.
//!
//! Every artifact is rendered (and merged, for the customizable file) in
//! memory first; the store is only touched once all of them succeeded.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::app::AppContext;
use crate::domain::AppError;
use crate::domain::ResolvedController;
use crate::domain::artifacts::{
    CONTROLLER_FILE, EVENT_HANDLER_FILE, MAIN_FILE, MODULE_FILE, WritePolicy,
};
use crate::domain::merge::{self, MergeOutcome};
use crate::ports::{ArtifactStore, ModuleTidier, TemplateRenderer};

const MODULE_TEMPLATE: &str = "go.mod";
const MAIN_TEMPLATE: &str = "main.go";
const CONTROLLER_TEMPLATE: &str = "controller.go";
const EVENT_HANDLER_TEMPLATE: &str = "event_handler.go";
const DERIVED_TEMPLATE: &str = "deepcopy.go";

/// What happened to one artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactAction {
    Created,
    Rewritten,
    Merged { imports: Vec<String>, methods: Vec<String> },
    /// The customizable file already had every declaration.
    Unchanged,
    /// A create-once file already existed.
    Kept,
}

impl ArtifactAction {
    fn writes(&self) -> bool {
        matches!(
            self,
            ArtifactAction::Created | ArtifactAction::Rewritten | ArtifactAction::Merged { .. }
        )
    }
}

impl fmt::Display for ArtifactAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactAction::Created => write!(f, "created"),
            ArtifactAction::Rewritten => write!(f, "rewritten"),
            ArtifactAction::Merged { imports, methods } => {
                write!(f, "merged (+{} imports, +{} methods)", imports.len(), methods.len())
            }
            ArtifactAction::Unchanged => write!(f, "unchanged"),
            ArtifactAction::Kept => write!(f, "kept"),
        }
    }
}

/// Outcome for one artifact, with its path relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactReport {
    pub path: PathBuf,
    pub action: ArtifactAction,
}

struct PlannedArtifact {
    path: PathBuf,
    content: String,
    action: ArtifactAction,
}

/// Generate every artifact for `controller`, then run `tidier` if given.
///
/// A tidy failure is returned as an error; files already written stay in place.
pub fn execute<S, R, T>(
    ctx: &AppContext<S, R>,
    controller: &ResolvedController,
    tidier: Option<&T>,
) -> Result<Vec<ArtifactReport>, AppError>
where
    S: ArtifactStore,
    R: TemplateRenderer,
    T: ModuleTidier,
{
    let planned = plan(ctx, controller)?;

    let mut reports = Vec::with_capacity(planned.len());
    for artifact in planned {
        let file = artifact.path.display();
        if artifact.action.writes() {
            tracing::info!(%file, action = %artifact.action, "write to file");
            ctx.store().write_file(&artifact.path, &artifact.content)?;
        } else {
            tracing::debug!(%file, action = %artifact.action, "skip file");
        }
        reports.push(ArtifactReport { path: artifact.path, action: artifact.action });
    }

    if let Some(tidier) = tidier {
        tidier.tidy(ctx.store().root())?;
    }

    tracing::info!("all done");
    Ok(reports)
}

fn plan<S, R>(
    ctx: &AppContext<S, R>,
    controller: &ResolvedController,
) -> Result<Vec<PlannedArtifact>, AppError>
where
    S: ArtifactStore,
    R: TemplateRenderer,
{
    let fixed = [
        (MODULE_FILE, MODULE_TEMPLATE, WritePolicy::CreateOnce),
        (MAIN_FILE, MAIN_TEMPLATE, WritePolicy::Rewrite),
        (CONTROLLER_FILE, CONTROLLER_TEMPLATE, WritePolicy::Rewrite),
        (EVENT_HANDLER_FILE, EVENT_HANDLER_TEMPLATE, WritePolicy::Merge),
    ];

    let mut planned = Vec::with_capacity(fixed.len() + controller.derived_copies.len());
    for (file, template, policy) in fixed {
        planned.push(plan_artifact(ctx, Path::new(file), policy, &controller.name, || {
            ctx.renderer().render(template, controller)
        })?);
    }

    for copy in &controller.derived_copies {
        tracing::debug!(
            resource = %copy.resource.kind,
            file = %copy.path.display(),
            "plan derived source"
        );
        planned.push(plan_artifact(ctx, &copy.path, WritePolicy::Rewrite, &controller.name, || {
            ctx.renderer().render(DERIVED_TEMPLATE, copy)
        })?);
    }

    Ok(planned)
}

fn plan_artifact<S, R, F>(
    ctx: &AppContext<S, R>,
    path: &Path,
    policy: WritePolicy,
    owner: &str,
    render: F,
) -> Result<PlannedArtifact, AppError>
where
    S: ArtifactStore,
    R: TemplateRenderer,
    F: FnOnce() -> Result<String, AppError>,
{
    let path = path.to_path_buf();
    let exists = ctx.store().file_exists(&path);

    match policy {
        WritePolicy::CreateOnce if exists => {
            Ok(PlannedArtifact { path, content: String::new(), action: ArtifactAction::Kept })
        }
        WritePolicy::CreateOnce | WritePolicy::Rewrite => {
            let content = render()?;
            let action = if exists { ArtifactAction::Rewritten } else { ArtifactAction::Created };
            Ok(PlannedArtifact { path, content, action })
        }
        WritePolicy::Merge => {
            let candidate = render()?;
            let Some(existing) = ctx.store().read_file(&path)? else {
                return Ok(PlannedArtifact {
                    path,
                    content: candidate,
                    action: ArtifactAction::Created,
                });
            };

            tracing::info!(file = %path.display(), "update file");
            match merge::merge(&existing, &candidate, owner)? {
                MergeOutcome::Unchanged => {
                    tracing::info!(file = %path.display(), "no new code");
                    Ok(PlannedArtifact {
                        path,
                        content: existing,
                        action: ArtifactAction::Unchanged,
                    })
                }
                MergeOutcome::Merged { source, added_imports, added_methods } => {
                    Ok(PlannedArtifact {
                        path,
                        content: source,
                        action: ArtifactAction::Merged {
                            imports: added_imports,
                            methods: added_methods,
                        },
                    })
                }
            }
        }
    }
}
