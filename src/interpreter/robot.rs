//! Robot State Machine
//!
//! One simulated arm robot: four angle/speed attributes and a one-way
//! initialization flag. Effects never print; they return the diagnostic
//! they produce so the session decides where it goes.

use super::log::DiagnosticKind;
use crate::vocab::{ActionKind, Attribute};

const UNINITIALIZED_MESSAGE: &str = "Inicialice el robot";

/// The diagnostic produced by one robot operation
#[derive(Debug, Clone, PartialEq)]
pub struct Effect {
    pub kind: DiagnosticKind,
    pub message: String,
}

impl Effect {
    fn new(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// A declared robot. Starts uninitialized with all attributes at zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Robot {
    velocity: u16,
    base: u16,
    body: u16,
    gripper: u16,
    initialized: bool,
}

impl Robot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite an attribute. A no-op until the robot is initialized.
    pub fn set_attribute(&mut self, attribute: Attribute, value: u16) -> Effect {
        if !self.initialized {
            return Effect::new(DiagnosticKind::Error, UNINITIALIZED_MESSAGE);
        }

        match attribute {
            Attribute::Velocity => self.velocity = value,
            Attribute::Base => self.base = value,
            Attribute::Body => self.body = value,
            Attribute::Gripper => self.gripper = value,
        }

        Effect::new(
            DiagnosticKind::AttributeSet,
            format!("{attribute} = {value}"),
        )
    }

    /// Perform an action. `Start` is the only transition out of the
    /// uninitialized state and stays in effect for the robot's lifetime;
    /// everything else is a no-op until then.
    pub fn perform(&mut self, action: ActionKind) -> Effect {
        match action {
            ActionKind::Start => {
                self.initialized = true;
                Effect::new(DiagnosticKind::Action, "Iniciar robot")
            }
            _ if !self.initialized => Effect::new(DiagnosticKind::Error, UNINITIALIZED_MESSAGE),
            ActionKind::CloseGripper => Effect::new(DiagnosticKind::Action, "Cerrar garra"),
            ActionKind::OpenGripper => Effect::new(DiagnosticKind::Action, "Abrir garra"),
            ActionKind::Dump => Effect::new(DiagnosticKind::StateDump, self.snapshot()),
        }
    }

    /// Formatted snapshot of all four attributes
    pub fn snapshot(&self) -> String {
        format!(
            "velocidad={}, base={}, cuerpo={}, garra={}",
            self.velocity, self.base, self.body, self.gripper
        )
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn velocity(&self) -> u16 {
        self.velocity
    }

    pub fn base(&self) -> u16 {
        self.base
    }

    pub fn body(&self) -> u16 {
        self.body
    }

    pub fn gripper(&self) -> u16 {
        self.gripper
    }
}
