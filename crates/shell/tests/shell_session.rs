use std::io::Cursor;
use std::sync::Arc;

use stockroom_infra::{InMemoryRepository, InventoryStore, JsonFileRepository};
use stockroom_inventory::Item;
use stockroom_shell::shell::{
    EMPTY_INVENTORY, EXIT_SAVED, INVALID_INPUT, ITEM_ADDED, ITEM_REMOVED, ITEM_UPDATED,
    NO_LOW_STOCK, NOT_FOUND, UNKNOWN_SELECTION, WELCOME,
};
use stockroom_shell::{Action, Flow, Shell};

/// Run a scripted session and return what was printed plus the repository.
fn run_script(seed: Vec<Item>, script: &str) -> (String, Arc<InMemoryRepository>, Vec<Item>) {
    let repo = Arc::new(InMemoryRepository::with_items(seed));
    let store = InventoryStore::open(repo.clone());

    let mut shell = Shell::new(store, Cursor::new(script.as_bytes().to_vec()), Vec::new());
    shell.run().unwrap();

    let (store, output) = shell.into_parts();
    let items = store.list().to_vec();
    (String::from_utf8(output).unwrap(), repo, items)
}

#[test]
fn welcome_then_menu_then_exit() {
    let (out, repo, _) = run_script(vec![], "7\n");

    assert!(out.starts_with(WELCOME));
    for action in Action::ALL {
        assert!(out.contains(&format!("{}) {}", action.number(), action.label())));
    }
    assert!(out.contains(EXIT_SAVED));
    assert_eq!(repo.save_count(), 1);
}

#[test]
fn viewing_empty_inventory_says_so() {
    let (out, _, _) = run_script(vec![], "1\nexit\n");
    assert!(out.contains(EMPTY_INVENTORY));
}

#[test]
fn add_saves_and_shows_table() {
    let (out, repo, items) = run_script(vec![], "2\nA1\nRice\n10\n2.50\n7\n");

    assert!(out.contains(ITEM_ADDED));
    assert!(out.contains("A1 | Rice | 10            | K2.50"));
    assert_eq!(items, vec![Item::new("A1", "Rice", 10, 2.50)]);
    // One save for the add, one on exit.
    assert_eq!(repo.save_count(), 2);
}

#[test]
fn add_with_bad_quantity_is_rejected_before_price_prompt() {
    let (out, repo, items) = run_script(vec![], "2\nA1\nRice\nten\n7\n");

    assert!(out.contains(INVALID_INPUT));
    assert!(!out.contains("Enter Price (MWK):"));
    assert!(items.is_empty());
    assert_eq!(repo.save_count(), 1);
}

#[test]
fn add_with_bad_price_is_rejected() {
    let (out, _, items) = run_script(vec![], "2\nA1\nRice\n10\nfree\n7\n");

    assert!(out.contains(INVALID_INPUT));
    assert!(items.is_empty());
}

#[test]
fn update_unknown_id_does_not_prompt_for_values() {
    let seed = vec![Item::new("A1", "Rice", 10, 2.50)];
    let (out, repo, items) = run_script(seed.clone(), "3\nZZ\n7\n");

    assert!(out.contains(NOT_FOUND));
    assert!(!out.contains("Enter new quantity:"));
    assert_eq!(items, seed);
    assert_eq!(repo.save_count(), 1);
}

#[test]
fn update_existing_item() {
    let seed = vec![
        Item::new("A1", "Rice", 10, 2.50),
        Item::new("A2", "Beans", 3, 1.20),
    ];
    let (out, _, items) = run_script(seed, "3\nA1\n2\n2.75\n7\n");

    assert!(out.contains(ITEM_UPDATED));
    assert_eq!(
        items,
        vec![
            Item::new("A1", "Rice", 2, 2.75),
            Item::new("A2", "Beans", 3, 1.20),
        ]
    );
}

#[test]
fn remove_known_and_unknown_ids() {
    let seed = vec![
        Item::new("A1", "Rice", 10, 2.50),
        Item::new("A2", "Beans", 3, 1.20),
        Item::new("A1", "Rice (dup)", 1, 2.50),
    ];
    let (out, _, items) = run_script(seed, "4\nA1\n4\nA1\n7\n");

    assert!(out.contains(ITEM_REMOVED));
    assert!(out.contains(NOT_FOUND));
    assert_eq!(items, vec![Item::new("A2", "Beans", 3, 1.20)]);
}

#[test]
fn search_by_id_and_by_name() {
    let seed = vec![
        Item::new("A1", "Rice", 10, 2.50),
        Item::new("A2", "Beans", 3, 1.20),
    ];
    let (out, _, _) = run_script(seed, "5\nA1\n5\nbEANS\n5\nSalt\n7\n");

    assert!(out.contains("Item Found!\nID: A1\nName: Rice\nQuantity: 10 KG\nPrice: K2.50\n"));
    assert!(out.contains("Item Found!\nID: A2\nName: Beans\nQuantity: 3 KG\nPrice: K1.20\n"));
    assert!(out.contains(NOT_FOUND));
}

#[test]
fn reports_list_only_low_stock() {
    let seed = vec![
        Item::new("A1", "Rice", 10, 2.50),
        Item::new("A2", "Beans", 3, 1.20),
    ];
    let (out, _, _) = run_script(seed, "6\n7\n");

    assert!(out.contains("A2 | Beans | 3             | K1.20"));
    assert!(!out.contains("A1 | Rice"));
}

#[test]
fn reports_without_low_stock() {
    let seed = vec![Item::new("A1", "Rice", 10, 2.50)];
    let (out, _, _) = run_script(seed, "View Reports\n7\n");
    assert!(out.contains(NO_LOW_STOCK));
}

#[test]
fn custom_threshold_is_used_by_reports() {
    let repo = Arc::new(InMemoryRepository::with_items(vec![Item::new("A1", "Rice", 10, 2.50)]));
    let store = InventoryStore::open(repo);
    let mut shell = Shell::new(store, Cursor::new(b"6\n7\n".to_vec()), Vec::new())
        .with_low_stock_threshold(11);
    shell.run().unwrap();

    let (_, output) = shell.into_parts();
    assert!(String::from_utf8(output).unwrap().contains("A1 | Rice"));
}

#[test]
fn unknown_selection_reshows_menu() {
    let (out, _, _) = run_script(vec![], "42\n7\n");
    assert!(out.contains(UNKNOWN_SELECTION));
    assert_eq!(out.matches("7) Exit").count(), 2);
}

#[test]
fn end_of_input_behaves_like_exit() {
    let (out, repo, items) = run_script(vec![], "2\nA1\n");

    assert!(out.contains(EXIT_SAVED));
    assert!(items.is_empty());
    assert_eq!(repo.save_count(), 1);
}

#[test]
fn dispatch_exit_returns_exit_flow() {
    let store = InventoryStore::open(InMemoryRepository::new());
    let mut shell = Shell::new(store, Cursor::new(Vec::new()), Vec::new());

    assert_eq!(shell.dispatch(Action::ViewInventory).unwrap(), Flow::Continue);
    assert_eq!(shell.dispatch(Action::Exit).unwrap(), Flow::Exit);
}

#[test]
fn failed_save_is_reported_but_change_is_kept() {
    let dir = tempfile::tempdir().unwrap();
    // The data path is a directory, so every save fails.
    let store = InventoryStore::open(JsonFileRepository::new(dir.path()));
    let mut shell = Shell::new(
        store,
        Cursor::new(b"2\nA1\nRice\n10\n2.50\n7\n".to_vec()),
        Vec::new(),
    );
    shell.run().unwrap();

    let (store, output) = shell.into_parts();
    let out = String::from_utf8(output).unwrap();
    assert!(out.contains("Error saving inventory:"));
    assert!(out.contains(ITEM_ADDED));
    assert!(!out.contains(EXIT_SAVED));
    assert_eq!(store.list(), &[Item::new("A1", "Rice", 10, 2.50)]);
}

#[test]
fn session_state_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");

    let first = "2\nA1\nRice\n10\n2.50\n2\nA2\nBeans\n3\n1.20\n3\nA1\n2\n2.75\n4\nA2\n7\n";
    let mut shell = Shell::new(
        InventoryStore::open(JsonFileRepository::new(&path)),
        Cursor::new(first.as_bytes().to_vec()),
        Vec::new(),
    );
    shell.run().unwrap();

    let mut shell = Shell::new(
        InventoryStore::open(JsonFileRepository::new(&path)),
        Cursor::new(b"1\n7\n".to_vec()),
        Vec::new(),
    );
    shell.run().unwrap();

    let (store, output) = shell.into_parts();
    assert_eq!(store.list(), &[Item::new("A1", "Rice", 2, 2.75)]);
    assert!(String::from_utf8(output).unwrap().contains("A1 | Rice | 2             | K2.75"));
}
