use todolist_core::{
    render_list, KeyValueTodoPersistence, MemoryKeyValueStore, Route, RowAction, RowEvent,
    StoreError, TodoPersistence, TodoSession, ValidationMode, SUCCESS_NOTICE,
};

fn session() -> TodoSession<KeyValueTodoPersistence<MemoryKeyValueStore>> {
    TodoSession::open(
        KeyValueTodoPersistence::new(MemoryKeyValueStore::new()),
        ValidationMode::Strict,
    )
}

#[test]
fn new_session_starts_on_empty_list() {
    let session = session();
    assert_eq!(session.route(), Route::List);
    let view = session.render();
    assert_eq!(view.title, "My Todo List");
    assert!(view.is_empty());
}

#[test]
fn save_adds_todo_notifies_and_clears_inputs() {
    let mut session = session();
    session.open_add();
    assert_eq!(session.route(), Route::Add);

    session.creation_mut().set_title("Buy milk");
    session.creation_mut().set_description("2%");
    let outcome = session.save_add().unwrap();

    assert_eq!(outcome.notice, SUCCESS_NOTICE);
    assert!(session.creation().is_blank());
    assert_eq!(session.route(), Route::Add);

    let view = session.render();
    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.rows[0].id, outcome.id);
    assert_eq!(view.rows[0].text, "Buy milk");
}

#[test]
fn invalid_save_reports_error_and_keeps_inputs() {
    let mut session = session();
    session.open_add();
    session.creation_mut().set_title("Buy milk");

    let err = session.save_add().unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
    assert_eq!(session.creation().title(), "Buy milk");
    assert!(session.store().is_empty());
    assert_eq!(session.store().persistence().read().unwrap(), None);
}

#[test]
fn cancel_discards_input_and_returns_to_list() {
    let mut session = session();
    session.open_add();
    session.creation_mut().set_title("draft");
    session.creation_mut().set_description("never saved");

    session.cancel_add();

    assert_eq!(session.route(), Route::List);
    assert!(session.creation().is_blank());
    assert!(session.store().is_empty());
}

#[test]
fn body_tap_toggles_and_action_taps_do_not_expand() {
    let mut session = session();
    session.creation_mut().set_title("A");
    session.creation_mut().set_description("first");
    let id = session.save_add().unwrap().id;

    assert!(session.row_event(&id, RowEvent::BodyTapped).unwrap());
    let row = session.render().rows.remove(0);
    assert!(row.expanded);
    assert_eq!(row.actions, vec![RowAction::Complete, RowAction::Delete]);

    assert!(session.row_event(&id, RowEvent::CompleteTapped).unwrap());
    let row = session.render().rows.remove(0);
    assert!(row.finished);
    assert!(!row.expanded);

    session.row_event(&id, RowEvent::BodyTapped).unwrap();
    let row = render_list(session.store()).rows.remove(0);
    assert_eq!(row.actions, vec![RowAction::Delete]);
    assert_eq!(row.description.as_deref(), Some("first"));

    assert!(!session.row_event(&id, RowEvent::CompleteTapped).unwrap());
    assert!(session.row_event(&id, RowEvent::DeleteTapped).unwrap());
    assert!(session.render().is_empty());
    assert!(!session.row_event(&id, RowEvent::DeleteTapped).unwrap());
}

#[test]
fn taps_on_unknown_ids_are_noops() {
    let mut session = session();
    for event in [
        RowEvent::BodyTapped,
        RowEvent::CompleteTapped,
        RowEvent::DeleteTapped,
    ] {
        assert!(!session.row_event("missing", event).unwrap());
    }
    assert_eq!(session.store().persistence().read().unwrap(), None);
}

#[test]
fn navigate_by_route_name_round_trips_screens() {
    let mut session = session();
    session.navigate(Route::from_name("add").unwrap());
    assert_eq!(session.route(), Route::Add);
    session.creation_mut().set_title("draft");

    session.navigate(Route::from_name(" list ").unwrap());
    assert_eq!(session.route(), Route::List);
    assert!(session.creation().is_blank());
}
