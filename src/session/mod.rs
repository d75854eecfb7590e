//! Session controller: one generate → present → confirm → run cycle.
//!
//! The controller owns every user-facing prompt and drives the inference and
//! execution layers through their traits. It never executes more than once
//! and never executes without an explicit `y`.

mod state;

pub use state::{SessionOutcome, SessionState};

use tracing::{debug, info};

use crate::exec::CommandRunner;
use crate::inference::Generator;
use crate::types::{CommandDescriptor, ExecutionOutcome};
use crate::ui::settings;
use crate::ui::{is_affirmative, Choice, Prompter, RenderSink};

/// Single-invocation session. Consumed by [`Session::run`].
pub struct Session<'a> {
    generator: &'a dyn Generator,
    runner: &'a dyn CommandRunner,
    prompter: &'a mut dyn Prompter,
    renderer: &'a dyn RenderSink,
    state: SessionState,
    descriptor: Option<CommandDescriptor>,
    execution: Option<ExecutionOutcome>,
}

impl<'a> Session<'a> {
    pub fn new(
        generator: &'a dyn Generator,
        runner: &'a dyn CommandRunner,
        prompter: &'a mut dyn Prompter,
        renderer: &'a dyn RenderSink,
    ) -> Self {
        Self {
            generator,
            runner,
            prompter,
            renderer,
            state: SessionState::Idle,
            descriptor: None,
            execution: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn descriptor(&self) -> Option<&CommandDescriptor> {
        self.descriptor.as_ref()
    }

    pub fn execution(&self) -> Option<&ExecutionOutcome> {
        self.execution.as_ref()
    }

    /// Run the full cycle for one natural-language request.
    pub async fn run(&mut self, request: &str) -> SessionOutcome {
        self.renderer
            .activity(&format!("{} {request}", settings::MSG_UNDERSTANDING));

        self.transition(SessionState::Generating);
        let generation = {
            let _progress = self.renderer.progress(settings::PROGRESS_GENERATING);
            self.generator.generate(request).await
        };
        let descriptor = match generation {
            Ok(descriptor) => descriptor,
            Err(err) => {
                self.renderer.error(&err.message);
                self.transition(SessionState::Done);
                return SessionOutcome::GenerationFailed(err);
            }
        };

        self.transition(SessionState::Presenting);
        self.present(&descriptor);
        let command = descriptor.command().to_string();
        self.descriptor = Some(descriptor);

        if !self.confirm(&command).await {
            self.renderer.notice(settings::MSG_CANCELLED);
            self.transition(SessionState::Done);
            return SessionOutcome::Cancelled;
        }

        self.transition(SessionState::Executing);
        self.renderer.activity(settings::MSG_EXECUTING);
        let outcome = self.runner.execute(&command).await;
        info!(exit_code = outcome.exit_code, "command finished");
        self.execution = Some(outcome.clone());

        if outcome.succeeded() {
            self.renderer.success(settings::MSG_SUCCESS);
            if !outcome.stdout.is_empty() {
                self.renderer.command_output(&outcome.stdout);
            }
        } else {
            self.report_failure(&command, &outcome).await;
        }

        self.transition(SessionState::Done);
        SessionOutcome::Completed(outcome)
    }

    fn present(&self, descriptor: &CommandDescriptor) {
        self.renderer.section(settings::LABEL_GENERATED_COMMAND);
        self.renderer.command(descriptor.command());
        self.renderer.section(settings::LABEL_EXPLANATION);
        self.renderer.explanation(descriptor.explanation());
        self.renderer
            .field(settings::LABEL_SAFETY, descriptor.safety_label());
        if descriptor.is_dangerous() {
            self.renderer.warn(settings::MSG_DANGEROUS);
        }
    }

    /// Ask for confirmation, allowing a single explain detour.
    async fn confirm(&mut self, command: &str) -> bool {
        self.transition(SessionState::Confirming);
        let answer = self.prompter.ask(settings::PROMPT_CONFIRM).await;
        match Choice::parse(answer.as_deref()) {
            Choice::Execute => true,
            Choice::Decline => false,
            Choice::Explain => {
                self.transition(SessionState::Explaining);
                self.renderer.activity(settings::MSG_DETAILED_EXPLANATION);
                let detailed = self.explain(command, "").await;
                self.renderer.explanation(&detailed);

                self.transition(SessionState::Confirming);
                let answer = self
                    .prompter
                    .ask(settings::PROMPT_CONFIRM_AFTER_EXPLAIN)
                    .await;
                is_affirmative(answer.as_deref())
            }
        }
    }

    async fn report_failure(&mut self, command: &str, outcome: &ExecutionOutcome) {
        self.renderer
            .error(&format!("Command failed (exit code: {})", outcome.exit_code));
        if !outcome.stderr.is_empty() {
            self.renderer.error_output(&outcome.stderr);
        }

        self.transition(SessionState::ExplainFailure);
        let answer = self.prompter.ask(settings::PROMPT_EXPLAIN_FAILURE).await;
        if !is_affirmative(answer.as_deref()) {
            debug!("diagnosis declined");
            return;
        }
        self.renderer.activity(settings::MSG_ANALYZING_ERROR);
        let diagnosis = self.explain(command, &outcome.stderr).await;
        self.renderer.explanation(&diagnosis);
    }

    async fn explain(&self, command: &str, error_output: &str) -> String {
        let _progress = self.renderer.progress(settings::PROGRESS_EXPLAINING);
        self.generator.explain_error(command, error_output).await
    }

    fn transition(&mut self, next: SessionState) {
        debug_assert!(
            self.state.can_transition_to(next),
            "illegal session transition {} -> {}",
            self.state,
            next
        );
        debug!(from = %self.state, to = %next, "session transition");
        self.state = next;
    }
}

/// Explain `command` without executing it. Always exits 0: explanation
/// failures degrade to placeholder text.
pub async fn explain_command(
    generator: &dyn Generator,
    renderer: &dyn RenderSink,
    command: &str,
) -> i32 {
    renderer.activity(&format!("{} {command}", settings::MSG_ANALYZING_COMMAND));
    let explanation = {
        let _progress = renderer.progress(settings::PROGRESS_EXPLAINING);
        generator.explain_error(command, "").await
    };
    renderer.section(settings::LABEL_EXPLANATION);
    renderer.explanation(&explanation);
    0
}
