use projboard_core::{Project, ProjectStatus, ProjectStore, StoreError};
use std::sync::{Arc, Mutex};
use std::thread;

#[test]
fn snapshot_preserves_insertion_order() {
    let store = ProjectStore::new();
    store
        .add_project("Build API", "Backend work", 3)
        .expect("first add");
    store
        .add_project("Write docs", "Docs work", 1)
        .expect("second add");

    let titles: Vec<_> = store
        .projects()
        .iter()
        .map(|project| project.title().to_string())
        .collect();
    assert_eq!(titles, vec!["Build API", "Write docs"]);
}

#[test]
fn n_adds_produce_n_records_with_unique_ids() {
    let store = ProjectStore::new();
    let mut ids = Vec::new();
    for index in 0..25 {
        ids.push(
            store
                .add_project(format!("project {index}"), "description", index)
                .expect("add"),
        );
    }
    assert_eq!(store.len(), 25);

    let listed: Vec<_> = store.projects().iter().map(Project::id).collect();
    assert_eq!(listed, ids);
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 25);
}

#[test]
fn every_listener_runs_once_per_add_in_registration_order() {
    let store = ProjectStore::new();
    let calls = Arc::new(Mutex::new(Vec::new()));
    for listener_index in 0..3 {
        let calls = Arc::clone(&calls);
        store
            .add_listener(move |snapshot: Vec<Project>| {
                calls.lock().expect("calls lock").push((listener_index, snapshot.len()));
            })
            .expect("register listener");
    }

    store.add_project("a", "first", 2).expect("add");
    store.add_project("b", "second", 2).expect("add");

    assert_eq!(
        *calls.lock().expect("calls lock"),
        vec![(0, 1), (1, 1), (2, 1), (0, 2), (1, 2), (2, 2)]
    );
}

#[test]
fn mutating_a_snapshot_does_not_leak_into_the_store() {
    let store = ProjectStore::new();
    let lengths = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&lengths);
    store
        .add_listener(move |mut snapshot: Vec<Project>| {
            sink.lock().expect("lengths lock").push(snapshot.len());
            snapshot.clear();
            snapshot.push(Project::new("intruder", "injected", 99));
        })
        .expect("register listener");

    store.add_project("a", "first", 2).expect("add");
    store.add_project("b", "second", 3).expect("add");

    assert_eq!(*lengths.lock().expect("lengths lock"), vec![1, 2]);
    assert!(store
        .projects()
        .iter()
        .all(|project| project.title() != "intruder"));
}

#[test]
fn removed_listener_is_not_called() {
    let store = ProjectStore::new();
    let count = Arc::new(Mutex::new(0));
    let sink = Arc::clone(&count);
    let id = store
        .add_listener(move |_snapshot: Vec<Project>| *sink.lock().expect("count lock") += 1)
        .expect("register listener");

    store.add_project("a", "first", 2).expect("add");
    assert!(store.remove_listener(id).expect("remove"));
    assert!(!store.remove_listener(id).expect("second remove"));
    store.add_project("b", "second", 2).expect("add");

    assert_eq!(*count.lock().expect("count lock"), 1);
}

#[test]
fn listener_cannot_add_projects_during_notification() {
    let store = Arc::new(ProjectStore::new());
    let weak = Arc::downgrade(&store);
    let results = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&results);
    store
        .add_listener(move |_snapshot: Vec<Project>| {
            if let Some(store) = weak.upgrade() {
                sink.lock()
                    .expect("results lock")
                    .push(store.add_project("echo", "loop", 1).map(|_| ()));
            }
        })
        .expect("register listener");

    store.add_project("a", "first", 2).expect("outer add");

    assert_eq!(*results.lock().expect("results lock"), vec![Err(StoreError::ReentrantMutation)]);
    assert_eq!(store.len(), 1);
}

#[test]
fn store_accepts_unvalidated_headcount() {
    let store = ProjectStore::new();
    store.add_project("", "", -4).expect("add");
    let project = &store.projects()[0];
    assert_eq!(project.people(), -4);
    assert_eq!(project.status(), ProjectStatus::Active);
}

#[test]
fn shared_instance_is_the_same_store_on_every_thread() {
    let id = ProjectStore::instance()
        .add_project("shared", "through instance", 2)
        .expect("add");

    let seen_elsewhere = thread::spawn(move || {
        ProjectStore::instance()
            .projects()
            .iter()
            .any(|project| project.id() == id)
    })
    .join()
    .expect("reader thread");

    assert!(seen_elsewhere);
    assert!(Arc::ptr_eq(
        &ProjectStore::instance(),
        &thread::spawn(ProjectStore::instance)
            .join()
            .expect("instance thread")
    ));
}

#[test]
fn listener_registered_on_one_thread_sees_adds_from_another() {
    let store = Arc::new(ProjectStore::new());
    let titles = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&titles);
    store
        .add_listener(move |snapshot: Vec<Project>| {
            let mut titles = sink.lock().expect("titles lock");
            *titles = snapshot
                .iter()
                .map(|project| project.title().to_string())
                .collect();
        })
        .expect("register listener");

    let writers: Vec<_> = (0..4)
        .map(|index| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                store
                    .add_project(format!("worker {index}"), "concurrent add", 2)
                    .expect("add from worker")
            })
        })
        .collect();
    for writer in writers {
        writer.join().expect("writer thread");
    }

    assert_eq!(store.len(), 4);
    let last_seen = titles.lock().expect("titles lock").clone();
    let stored: Vec<_> = store
        .projects()
        .iter()
        .map(|project| project.title().to_string())
        .collect();
    assert_eq!(last_seen, stored);
}

#[test]
fn listener_cannot_unsubscribe_during_notification() {
    let store = Arc::new(ProjectStore::new());
    let weak = Arc::downgrade(&store);
    let own_id = Arc::new(Mutex::new(None));
    let id_slot = Arc::clone(&own_id);
    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&calls);
    let id = store
        .add_listener(move |_snapshot: Vec<Project>| {
            let id = *id_slot.lock().expect("id lock");
            if let (Some(store), Some(id)) = (weak.upgrade(), id) {
                sink.lock()
                    .expect("calls lock")
                    .push(store.remove_listener(id));
            }
        })
        .expect("register listener");
    *own_id.lock().expect("id lock") = Some(id);

    store.add_project("a", "first", 2).expect("add");
    store.add_project("b", "second", 2).expect("add");

    assert_eq!(
        *calls.lock().expect("calls lock"),
        vec![
            Err(StoreError::ReentrantMutation),
            Err(StoreError::ReentrantMutation)
        ]
    );
    assert!(store.remove_listener(id).expect("remove after notification"));
}
