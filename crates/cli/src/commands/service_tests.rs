// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::commands::{ActionResult, CommandKind, CommandSource};
use async_trait::async_trait;
use parking_lot::Mutex;
use proptest::prelude::*;

/// Produces fixed commands after an optional delay, or fails.
struct StaticLoader {
    name: String,
    commands: Vec<(&'static str, &'static str)>,
    delay: Duration,
    failure: Option<&'static str>,
}

impl StaticLoader {
    fn new(name: &str, commands: &[(&'static str, &'static str)]) -> Self {
        Self {
            name: name.to_string(),
            commands: commands.to_vec(),
            delay: Duration::ZERO,
            failure: None,
        }
    }

    fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    fn failing(name: &str, reason: &'static str) -> Self {
        Self {
            failure: Some(reason),
            ..Self::new(name, &[])
        }
    }

    fn shared(self) -> Arc<dyn CommandLoader> {
        Arc::new(self)
    }
}

#[async_trait]
impl CommandLoader for StaticLoader {
    fn name(&self) -> &str {
        &self.name
    }

    async fn load_commands(&self) -> Result<Vec<SlashCommand>, LoaderError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if let Some(reason) = self.failure {
            return Err(LoaderError::Provider(reason.to_string()));
        }
        Ok(self
            .commands
            .iter()
            .map(|&(name, description)| {
                SlashCommand::new(
                    name,
                    description,
                    CommandKind::File,
                    CommandSource::Project,
                    move |_| ActionResult::Message(description.to_string()),
                )
            })
            .collect())
    }
}

#[derive(Default)]
struct RecordingDiagnostics {
    reports: Mutex<Vec<(String, String)>>,
}

impl Diagnostics for RecordingDiagnostics {
    fn report(&self, message: &str, detail: &str) {
        self.reports
            .lock()
            .push((message.to_string(), detail.to_string()));
    }
}

fn entries(catalog: &CommandCatalog) -> Vec<(String, String)> {
    catalog
        .iter()
        .map(|c| (c.name.clone(), c.description.clone()))
        .collect()
}

// =========================================================================
// Merge policy
// =========================================================================

#[tokio::test]
async fn later_loader_overrides_and_keeps_first_position() {
    let service = CommandService::create(vec![
        StaticLoader::new("first", &[("a", "a"), ("b", "b")]).shared(),
        StaticLoader::new("empty", &[]).shared(),
        StaticLoader::new("second", &[("b", "b'"), ("c", "c")]).shared(),
    ])
    .await;

    let catalog = service.commands();
    assert_eq!(catalog.len(), 3);
    let names: Vec<_> = catalog.names().collect();
    assert_eq!(names, vec!["a", "b", "c"]);
    assert_eq!(catalog.get("b").unwrap().description, "b'");
}

#[tokio::test]
async fn overridden_command_runs_the_last_action() {
    let service = CommandService::create(vec![
        StaticLoader::new("first", &[("x", "from first")]).shared(),
        StaticLoader::new("second", &[("x", "from second")]).shared(),
    ])
    .await;

    let catalog = service.commands();
    assert_eq!(
        catalog.get("x").unwrap().execute(""),
        ActionResult::Message("from second".into())
    );
}

#[tokio::test]
async fn duplicates_within_one_loader_keep_last() {
    let service = CommandService::create(vec![StaticLoader::new(
        "dupes",
        &[("x", "one"), ("y", "y"), ("x", "two")],
    )
    .shared()])
    .await;

    assert_eq!(
        entries(&service.commands()),
        vec![("x".into(), "two".into()), ("y".into(), "y".into())]
    );
}

// =========================================================================
// Failure isolation
// =========================================================================

#[tokio::test]
async fn failed_loader_is_reported_and_skipped() {
    let diagnostics = Arc::new(RecordingDiagnostics::default());
    let service = CommandService::new(vec![
        StaticLoader::new("good", &[("a", "a")]).shared(),
        StaticLoader::failing("bad", "disk on fire").shared(),
        StaticLoader::new("also-good", &[("c", "c")]).shared(),
    ])
    .with_diagnostics(diagnostics.clone());

    service.load().await;

    let names: Vec<_> = service.commands().names().map(str::to_string).collect();
    assert_eq!(names, vec!["a", "c"]);
    let reports = diagnostics.reports.lock();
    assert_eq!(reports.len(), 1);
    assert!(reports[0].0.contains("bad"));
    assert_eq!(reports[0].1, "disk on fire");
}

#[tokio::test]
async fn all_loaders_failing_yields_empty_catalog() {
    let diagnostics = Arc::new(RecordingDiagnostics::default());
    let service = CommandService::new(vec![
        StaticLoader::failing("one", "nope").shared(),
        StaticLoader::failing("two", "nope").shared(),
    ])
    .with_diagnostics(diagnostics.clone());

    service.load().await;

    assert!(service.commands().is_empty());
    assert_eq!(diagnostics.reports.lock().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn slow_loader_times_out_without_blocking_others() {
    let diagnostics = Arc::new(RecordingDiagnostics::default());
    let service = CommandService::new(vec![
        StaticLoader::new("slow", &[("slow", "slow")])
            .delayed(Duration::from_secs(30))
            .shared(),
        StaticLoader::new("fast", &[("fast", "fast")]).shared(),
    ])
    .with_diagnostics(diagnostics.clone())
    .with_loader_timeout(Duration::from_secs(1));

    service.load().await;

    let names: Vec<_> = service.commands().names().map(str::to_string).collect();
    assert_eq!(names, vec!["fast"]);
    let reports = diagnostics.reports.lock();
    assert_eq!(reports.len(), 1);
    assert!(reports[0].0.contains("slow"));
    assert!(reports[0].1.contains("did not finish"));
}

#[tokio::test(start_paused = true)]
async fn loaders_run_concurrently() {
    let service = CommandService::new(vec![
        StaticLoader::new("one", &[("a", "a")])
            .delayed(Duration::from_secs(5))
            .shared(),
        StaticLoader::new("two", &[("b", "b")])
            .delayed(Duration::from_secs(5))
            .shared(),
        StaticLoader::new("three", &[("c", "c")])
            .delayed(Duration::from_secs(5))
            .shared(),
    ]);

    let start = tokio::time::Instant::now();
    service.load().await;

    assert!(start.elapsed() < Duration::from_secs(10));
    assert_eq!(service.commands().len(), 3);
}

// =========================================================================
// Published catalog
// =========================================================================

#[test]
fn catalog_is_empty_before_load() {
    let service = CommandService::new(vec![StaticLoader::new("a", &[("a", "a")]).shared()]);
    let catalog = service.commands();
    assert!(catalog.is_empty());
    assert_eq!(catalog.len(), 0);
}

#[tokio::test]
async fn reload_replaces_catalog_wholesale() {
    let toggle = Arc::new(Mutex::new(true));

    struct Toggling(Arc<Mutex<bool>>);

    #[async_trait]
    impl CommandLoader for Toggling {
        fn name(&self) -> &str {
            "toggling"
        }

        async fn load_commands(&self) -> Result<Vec<SlashCommand>, LoaderError> {
            let first = *self.0.lock();
            let name = if first { "old" } else { "new" };
            Ok(vec![SlashCommand::new(
                name,
                name,
                CommandKind::File,
                CommandSource::User,
                |_| ActionResult::Quit,
            )])
        }
    }

    let loader: Arc<dyn CommandLoader> = Arc::new(Toggling(toggle.clone()));
    let service = CommandService::create(vec![loader]).await;
    let before = service.commands();
    assert_eq!(before.names().collect::<Vec<_>>(), vec!["old"]);

    *toggle.lock() = false;
    service.load().await;

    assert_eq!(service.commands().names().collect::<Vec<_>>(), vec!["new"]);
    assert!(service.commands().get("old").is_none());
    // Earlier snapshots are unaffected by the reload.
    assert_eq!(before.names().collect::<Vec<_>>(), vec!["old"]);
}

#[tokio::test]
async fn copies_of_a_snapshot_do_not_touch_the_service() {
    let service =
        CommandService::create(vec![StaticLoader::new("a", &[("a", "a"), ("b", "b")]).shared()])
            .await;

    let mut copy = service.commands().to_vec();
    copy.clear();

    assert_eq!(service.commands().len(), 2);
}

// =========================================================================
// Determinism
// =========================================================================

fn load_with_delays(delays: &[u64]) -> Vec<(String, String)> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .start_paused(true)
        .build()
        .unwrap();
    let outputs: [&[(&'static str, &'static str)]; 4] = [
        &[("a", "a1"), ("b", "b1")],
        &[],
        &[("b", "b3"), ("c", "c3")],
        &[("a", "a4"), ("d", "d4")],
    ];
    let loaders = outputs
        .iter()
        .zip(delays)
        .enumerate()
        .map(|(i, (commands, &delay))| {
            StaticLoader::new(&format!("loader-{i}"), commands)
                .delayed(Duration::from_millis(delay))
                .shared()
        })
        .collect();
    runtime.block_on(async {
        let service = CommandService::create(loaders).await;
        entries(&service.commands())
    })
}

proptest! {
    #[test]
    fn catalog_is_independent_of_completion_order(
        delays in proptest::collection::vec(0u64..100, 4)
    ) {
        let expected: Vec<(String, String)> = vec![
            ("a".into(), "a4".into()),
            ("b".into(), "b3".into()),
            ("c".into(), "c3".into()),
            ("d".into(), "d4".into()),
        ];
        prop_assert_eq!(load_with_delays(&delays), expected);
    }
}
