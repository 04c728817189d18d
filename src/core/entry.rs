use std::io::Write;

use crate::core::{Plan, Section};
use crate::utils::error::{AppError, Result};
use crate::utils::monitor::SystemMonitor;

pub const GREETING: &str = "Hello World!";

/// Runs the greeting followed by every callable in the plan, in order.
///
/// The first failing callable aborts the run; nothing after it is invoked.
pub struct EntryPoint {
    plan: Plan,
    monitor: SystemMonitor,
}

impl EntryPoint {
    pub fn new(plan: Plan) -> Self {
        Self {
            plan,
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(plan: Plan, enable_monitoring: bool) -> Self {
        Self {
            plan,
            monitor: SystemMonitor::new(enable_monitoring),
        }
    }

    pub fn plan(&self) -> &Plan {
        &self.plan
    }

    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        tracing::debug!("Running entry point with {} callables", self.plan.len());

        writeln!(out, "{}", GREETING)?;
        writeln!(out)?;
        self.monitor.log_stats("greeting");

        self.run_section(Section::Packages, out)?;
        writeln!(out)?;
        self.monitor.log_stats("packages");

        self.run_section(Section::Folders, out)?;
        self.monitor.log_stats("folders");

        out.flush()?;
        self.monitor.log_final_stats();
        tracing::info!("✅ Entry point finished");
        Ok(())
    }

    fn run_section<W: Write>(&self, section: Section, out: &mut W) -> Result<()> {
        for (_, callable) in self.plan.steps().filter(|(s, _)| *s == section) {
            tracing::debug!(module = callable.module_path, "Invoking {}", callable.name);
            callable
                .call(&mut *out)
                .map_err(|source| AppError::CallableFailed {
                    name: callable.name.to_string(),
                    source,
                })?;
        }
        Ok(())
    }

    /// Writes the plan without invoking anything, one `<section>: <path>` line
    /// per callable.
    pub fn describe<W: Write>(&self, out: &mut W) -> Result<()> {
        for (section, callable) in self.plan.steps() {
            writeln!(out, "{}: {}", section, callable.qualified_name())?;
        }
        Ok(())
    }
}

impl Default for EntryPoint {
    fn default() -> Self {
        Self::new(Plan::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Callable;
    use std::io;

    fn silent(_out: &mut dyn Write) -> io::Result<()> {
        Ok(())
    }

    fn failing(_out: &mut dyn Write) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::Other, "pkg_a exploded"))
    }

    #[test]
    fn test_silent_callables_leave_only_greeting_and_separators() {
        let silent_plan = Plan::new(
            vec![
                Callable::new("pkg_a", "test::a", silent),
                Callable::new("pkg_b", "test::b", silent),
                Callable::new("pkg_c", "test::c", silent),
                Callable::new("pkg_d", "test::d", silent),
            ],
            vec![
                Callable::new("folder_a", "test::fa", silent),
                Callable::new("folder_b", "test::fb", silent),
            ],
        );

        let mut out = Vec::new();
        EntryPoint::new(silent_plan).run(&mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Hello World!\n\n\n");
    }

    #[test]
    fn test_default_plan_output() {
        let mut out = Vec::new();
        EntryPoint::default().run(&mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Hello World!\n\npkg_a\npkg_b\npkg_c\npkg_d\n\nfolder_a\nfolder_b\n"
        );
    }

    #[test]
    fn test_failure_stops_the_run() {
        let mut plan = Plan::default();
        plan.packages[0] = Callable::new("pkg_a", "test::a", failing);

        let mut out = Vec::new();
        let err = EntryPoint::new(plan).run(&mut out).unwrap_err();

        assert!(matches!(err, AppError::CallableFailed { ref name, .. } if name == "pkg_a"));
        assert_eq!(String::from_utf8(out).unwrap(), "Hello World!\n\n");
    }

    #[test]
    fn test_describe_lists_plan_without_running() {
        let mut out = Vec::new();
        EntryPoint::default().describe(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "packages: foo::path::to::package::a::pkg_a");
        assert_eq!(lines[5], "folders: foo::path::to::folder::b::folder_b");
        assert!(!text.contains("Hello World!"));
    }
}
