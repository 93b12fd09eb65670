//! Synthetic snapshot source.
//!
//! Produces deterministic, slowly varying metrics so the dashboard can run
//! without a sampler attached.

use chrono::Utc;

use super::{ProviderError, SnapshotProvider};
use crate::model::{
    ContextSwitches, MemoryComposition, MetricSnapshot, PageFaults, ProcessRow, ProcessSnapshot,
    ProcessTableSnapshot,
};

const MIB: u64 = 1024 * 1024;

/// Which page the synthetic data is shaped for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    /// One process with a handful of children.
    SingleProcess { pid: u32 },
    /// A small system process table.
    AllProcesses,
}

/// Processes of the synthetic system: (pid, command, status, threads).
const TYPICAL_SYSTEM: [(u32, &str, &str, u32); 8] = [
    (1, "/sbin/init", "S", 1),
    (412, "/usr/lib/systemd/systemd-journald", "S", 1),
    (733, "/usr/sbin/sshd -D", "S", 1),
    (1021, "postgres: checkpointer", "S", 1),
    (1022, "postgres: walwriter", "S", 1),
    (2048, "-bash", "S", 1),
    (2311, "nginx: worker process", "R", 4),
    (3120, "/usr/bin/python3 app.py", "R", 12),
];

/// Deterministic source of synthetic snapshots.
pub struct MockProvider {
    scenario: Scenario,
    tick: u64,
    boot_ms: i64,
}

impl MockProvider {
    pub fn new(scenario: Scenario) -> Self {
        // Processes appear to have started an hour ago.
        Self::with_boot_time(scenario, Utc::now().timestamp_millis() - 3_600_000)
    }

    /// Creates a provider whose processes started at `boot_ms`.
    pub fn with_boot_time(scenario: Scenario, boot_ms: i64) -> Self {
        Self {
            scenario,
            tick: 0,
            boot_ms,
        }
    }

    /// Smooth value in `[0, 1]` for the current tick, shifted by `phase`.
    fn wave(&self, phase: f64) -> f64 {
        ((self.tick as f64 * 0.35 + phase).sin() + 1.0) / 2.0
    }

    fn process(&self, pid: u32) -> ProcessSnapshot {
        let cpu = 5.0 + 60.0 * self.wave(0.0);
        let mem = 2.0 + 6.0 * self.wave(1.3);
        let rss = 48 * MIB + (16.0 * self.wave(2.1)) as u64 * MIB;

        ProcessSnapshot {
            cpu_percent: Some(cpu),
            mem_percent: Some(mem),
            identity: Some(ProcessRow {
                pid,
                command: "/usr/bin/python3 app.py".to_string(),
                cpu_percent: cpu,
                mem_percent: mem,
                status: if cpu > 40.0 { "R" } else { "S" }.to_string(),
                foreground: false,
                created_at_ms: self.boot_ms,
                threads: 12,
            }),
            children: (1..=3)
                .map(|i| format!("{} worker-{}", pid + i, i))
                .collect(),
            context_switches: Some(ContextSwitches {
                voluntary: 1_200 + self.tick * 37,
                involuntary: 40 + self.tick * 3,
            }),
            page_faults: Some(PageFaults {
                minor: 15_000 + self.tick * 210,
                major: 12 + self.tick / 5,
            }),
            memory: Some(MemoryComposition {
                rss,
                data: rss / 2,
                stack: 132 * 1024,
                swap: if self.tick % 20 < 10 { 0 } else { 4 * MIB },
            }),
        }
    }

    fn table(&self) -> ProcessTableSnapshot {
        let processes = TYPICAL_SYSTEM
            .iter()
            .enumerate()
            .map(|(i, &(pid, command, status, threads))| ProcessRow {
                pid,
                command: command.to_string(),
                cpu_percent: 10.0 * self.wave(i as f64),
                mem_percent: 0.5 + 3.0 * self.wave(i as f64 + 0.7),
                status: status.to_string(),
                foreground: command == "-bash",
                created_at_ms: self.boot_ms + i as i64 * 60_000,
                threads,
            })
            .collect();
        ProcessTableSnapshot { processes }
    }
}

impl SnapshotProvider for MockProvider {
    fn advance(&mut self) -> Option<MetricSnapshot> {
        let snapshot = match self.scenario {
            Scenario::SingleProcess { pid } => MetricSnapshot::Process(self.process(pid)),
            Scenario::AllProcesses => MetricSnapshot::AllProcesses(self.table()),
        };
        self.tick += 1;
        Some(snapshot)
    }

    fn last_error(&self) -> Option<&ProviderError> {
        None
    }
}
