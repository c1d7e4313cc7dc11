use std::sync::{Arc, Mutex};

use rustyline::{history::FileHistory, Editor};

mod prompt;

use crate::{
    core::{commands::BuiltinRegistry, parse, parse::CommandLine},
    error::ShellError,
    highlight::StatusStyler,
    input::History,
    process::{jobs::JobTable, launcher::ProcessLauncher, signal},
};

pub const PROMPT_ENV_VAR: &str = "MY_PROMPT";

const HISTORY_FILE: &str = ".vena_history";
const HISTORY_CAPACITY: usize = 1000;

pub struct Shell {
    editor: Editor<(), FileHistory>,
    prompt: String,
    registry: BuiltinRegistry,
    launcher: ProcessLauncher,
    jobs: JobTable,
    history: Arc<Mutex<History>>,
    styler: StatusStyler,
}

impl Shell {
    pub fn new() -> Result<Self, ShellError> {
        let editor = Editor::<(), FileHistory>::new()?;

        let history_file = dirs::home_dir()
            .ok_or(ShellError::HomeDirNotFound)?
            .join(HISTORY_FILE);
        let history = Arc::new(Mutex::new(History::new(history_file, HISTORY_CAPACITY)?));

        let launcher = ProcessLauncher::new();
        let registry = BuiltinRegistry::new(Arc::clone(&history), launcher);

        Ok(Shell {
            editor,
            prompt: prompt::resolve(PROMPT_ENV_VAR),
            registry,
            launcher,
            jobs: JobTable::new(),
            history,
            styler: StatusStyler::new(),
        })
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        // the shell itself must survive terminal interrupts aimed at its
        // foreground children; children get defaults back at spawn time
        signal::ignore_in_shell()?;

        loop {
            match self.editor.readline(&self.prompt) {
                Ok(line) => {
                    self.report_finished_jobs();

                    if let Err(e) = self.execute_line(&line) {
                        eprintln!("{}", self.styler.error(&e.to_string()));
                    }
                }
                Err(rustyline::error::ReadlineError::Interrupted) => continue,
                Err(rustyline::error::ReadlineError::Eof) => break,
                Err(e) => {
                    eprintln!("{}", self.styler.error(&format!("Error: {}", e)));
                    continue;
                }
            }
        }
        Ok(())
    }

    fn execute_line(&mut self, line: &str) -> Result<(), ShellError> {
        let Some(command) = parse::parse(line) else {
            return Ok(());
        };

        let trimmed = line.trim();
        self.editor.add_history_entry(trimmed)?;
        if let Ok(mut history) = self.history.lock() {
            history.add(trimmed)?;
        }

        match self.registry.dispatch(command.program(), command.args()) {
            Some(handled) => handled.map_err(ShellError::from),
            None => self.launch(&command, trimmed),
        }
    }

    fn launch(&mut self, command: &CommandLine, line: &str) -> Result<(), ShellError> {
        if command.background {
            let child = self.launcher.spawn_background(&command.argv)?;
            let pid = child.id();

            match self.jobs.track(child, line) {
                Ok(()) => {
                    let notice = format!("[Running in background] PID: {}", pid);
                    println!("{}", self.styler.notice(&notice));
                }
                // the process was already spawned; it keeps running, but
                // this shell has no free slot to remember it in
                Err(_untracked) => {
                    eprintln!(
                        "{}",
                        self.styler.error("Max jobs reached. Cannot add new job.")
                    );
                }
            }
            Ok(())
        } else {
            self.launcher
                .run_foreground(&command.argv)
                .map_err(ShellError::from)
        }
    }

    fn report_finished_jobs(&mut self) {
        for job in self.jobs.reap() {
            let notice = format!("[Done] PID: {}  {}", job.pid, job.line);
            println!("{}", self.styler.success(&notice));
        }
    }
}
