//! Behaviour-driven step definitions driving the import CLI scenarios.

use super::helpers::{workspace, write_baking_catalog, write_utf8};
use super::*;
use crate::import::run_import_with;
use crate::recommend::{DefaultItemStoreBuilder, run_recommend_with};
use camino::Utf8PathBuf;
use clap::Parser;
use larder_core::{ItemStore, PersistCatalogError, SqliteItemStore};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::json;
use std::cell::RefCell;
use tempfile::TempDir;

struct ImportWorld {
    _tmp: TempDir,
    catalog: Utf8PathBuf,
    database: Utf8PathBuf,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl ImportWorld {
    fn new() -> Self {
        let (tmp, root) = workspace();
        Self {
            _tmp: tmp,
            catalog: root.join("catalog.json"),
            database: root.join("data/larder.db"),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn run(&self, argv: &[&str]) {
        let parsed = Cli::try_parse_from(argv.iter().copied()).map_err(CliError::from);
        let outcome = parsed.and_then(|cli| {
            let mut buffer = self.stdout.borrow_mut();
            buffer.clear();
            match cli.command {
                Command::Import(args) => run_import_with(args, &mut *buffer),
                Command::Recommend(args) => {
                    run_recommend_with(args, &DefaultItemStoreBuilder, &mut *buffer)
                }
            }
        });
        self.result.replace(Some(outcome));
    }

    fn stdout(&self) -> String {
        String::from_utf8(self.stdout.borrow().clone()).expect("stdout utf-8")
    }

    fn assert_succeeded(&self) {
        let borrowed = self.result.borrow();
        if let Some(Err(err)) = borrowed.as_ref() {
            panic!("expected success, found {err:?}");
        }
    }
}

#[fixture]
fn world() -> ImportWorld {
    ImportWorld::new()
}

#[given("a baking catalog exists on disk")]
fn baking_catalog_exists(#[from(world)] world: &ImportWorld) {
    write_baking_catalog(&world.catalog);
}

#[given("the catalog file contains invalid JSON")]
fn catalog_contains_invalid_json(#[from(world)] world: &ImportWorld) {
    write_utf8(&world.catalog, b"{ \"items\": [");
}

#[given("a catalog whose user saved an unknown recipe")]
fn catalog_with_dangling_saved_item(#[from(world)] world: &ImportWorld) {
    let payload = json!({
        "items": [{"id": "cake", "title": "Cake", "ingredients": ["flour"]}],
        "users": [{"id": "cook", "saved": ["souffle"]}]
    });
    let bytes = serde_json::to_vec(&payload).expect("serialise catalog");
    write_utf8(&world.catalog, &bytes);
}

#[when("I run the import command")]
fn run_import_command(#[from(world)] world: &ImportWorld) {
    world.run(&[
        "larder",
        "import",
        world.catalog.as_str(),
        "--database",
        world.database.as_str(),
    ]);
}

#[when("I recommend 2 recipes for the cook from the database")]
fn recommend_from_database(#[from(world)] world: &ImportWorld) {
    world.assert_succeeded();
    world.run(&[
        "larder",
        "recommend",
        "--user",
        "cook",
        "--size",
        "2",
        "--seed",
        "1",
        "--database",
        world.database.as_str(),
    ]);
}

#[then("the command reports 3 items and 2 users")]
fn command_reports_counts(#[from(world)] world: &ImportWorld) {
    world.assert_succeeded();
    let stdout = world.stdout();
    assert!(
        stdout.starts_with("imported 3 items and 2 users into "),
        "unexpected summary: {stdout}"
    );
}

#[then("the database lists cake, biscuits, and risotto")]
fn database_lists_items(#[from(world)] world: &ImportWorld) {
    let store = SqliteItemStore::open(&world.database).expect("open imported database");
    let ids: Vec<String> = store
        .list_all_items()
        .expect("list items")
        .into_iter()
        .map(|item| item.id.as_str().to_owned())
        .collect();
    assert_eq!(ids, ["cake", "biscuits", "risotto"]);
}

#[then("biscuits is recommended by similarity with score 0.75")]
fn biscuits_recommended(#[from(world)] world: &ImportWorld) {
    world.assert_succeeded();
    let payload: serde_json::Value = serde_json::from_str(&world.stdout()).expect("JSON output");
    let first = payload
        .as_array()
        .and_then(|entries| entries.first())
        .expect("at least one recommendation");
    assert_eq!(first["id"], "biscuits");
    assert_eq!(first["source"], "similarity");
    assert_eq!(first["score"], 0.75);
}

#[then("the import fails because the catalog JSON is invalid")]
fn import_fails_invalid_json(#[from(world)] world: &ImportWorld) {
    let borrowed = world.result.borrow();
    match borrowed.as_ref().expect("result recorded") {
        Err(CliError::ParseCatalog { path, .. }) => assert_eq!(*path, world.catalog),
        other => panic!("expected ParseCatalog, found {other:?}"),
    }
}

#[then("the import fails because a saved recipe is unknown")]
fn import_fails_unknown_saved(#[from(world)] world: &ImportWorld) {
    let borrowed = world.result.borrow();
    match borrowed.as_ref().expect("result recorded") {
        Err(CliError::PersistCatalog {
            source: PersistCatalogError::UnknownSavedItem { item_id, .. },
            ..
        }) => assert_eq!(item_id.as_str(), "souffle"),
        other => panic!("expected UnknownSavedItem, found {other:?}"),
    }
}

macro_rules! register_import_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/import_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: ImportWorld) {
            let _ = world;
        }
    };
}

register_import_scenario!(import_happy_path, "importing a catalog into a new database");
register_import_scenario!(import_then_recommend, "recommending from an imported catalog");
register_import_scenario!(import_invalid_json, "rejecting invalid catalog JSON");
register_import_scenario!(import_unknown_saved_item, "rejecting saved items outside the catalog");
