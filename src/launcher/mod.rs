use serde::Deserialize;
use std::path::PathBuf;

use crate::actions::script_launch::ScriptSpawner;
use crate::ui::dialog::ErrorReporter;

const CONTROL_PREFIX: &str = "action-";

/// # Action
/// ### Fields:
/// - **label:** Text shown on the button
/// - **script:** Script handed to the interpreter as its only argument. Relative
/// paths are resolved by the child against the launcher's working directory
/// - **help:** Short description shown as the button tooltip
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Action {
    pub label: String,
    pub script: PathBuf,
    #[serde(default)]
    pub help: String,
}
impl Action {
    pub fn new<L, S, H>(label: L, script: S, help: H) -> Self
    where
        L: Into<String>,
        S: Into<PathBuf>,
        H: Into<String>,
    {
        Self {
            label: label.into(),
            script: script.into(),
            help: help.into(),
        }
    }
}

/// Position of an action inside its registry
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ActionId(usize);
impl ActionId {
    /// Name given to the control that triggers this action
    pub fn control_name(&self) -> String {
        format!("{}{}", CONTROL_PREFIX, self.0)
    }
}

/// Ordered, immutable set of actions. Maps control names back to actions.
#[derive(Debug)]
pub struct ActionRegistry {
    actions: Vec<Action>,
}
impl ActionRegistry {
    pub fn new(actions: Vec<Action>) -> Self {
        Self { actions }
    }
    pub fn iter(&self) -> impl Iterator<Item = (ActionId, &Action)> {
        self.actions
            .iter()
            .enumerate()
            .map(|(i, action)| (ActionId(i), action))
    }
    pub fn get(&self, id: ActionId) -> Option<&Action> {
        self.actions.get(id.0)
    }
    pub fn resolve(&self, control_name: &str) -> Option<ActionId> {
        let index = control_name
            .strip_prefix(CONTROL_PREFIX)?
            .parse::<usize>()
            .ok()?;
        (index < self.actions.len()).then_some(ActionId(index))
    }
}

/// Dispatches activations to the spawner. Holds no handle to anything it
/// starts.
pub struct Launcher {
    actions: ActionRegistry,
    spawner: Box<dyn ScriptSpawner>,
    reporter: Box<dyn ErrorReporter>,
}
impl Launcher {
    pub fn new(
        actions: ActionRegistry,
        spawner: Box<dyn ScriptSpawner>,
        reporter: Box<dyn ErrorReporter>,
    ) -> Self {
        Self {
            actions,
            spawner,
            reporter,
        }
    }
    pub fn actions(&self) -> &ActionRegistry {
        &self.actions
    }

    /// Entry point for every control. Unknown names are ignored.
    pub fn on_control(&self, control_name: &str) {
        match self.actions.resolve(control_name) {
            Some(id) => self.on_activate(id),
            None => log::warn!("No action bound to control \"{}\"", control_name),
        }
    }

    /// Starts the action's script and returns without waiting. A failed
    /// spawn is handed to the reporter.
    pub fn on_activate(&self, id: ActionId) {
        let Some(action) = self.actions.get(id) else {
            log::warn!("Unknown action id {:?}", id);
            return;
        };
        log::info!("Activated \"{}\"", action.label);
        if let Err(error) = self.spawner.spawn(&action.script) {
            self.reporter.report(&error);
        }
    }
}
