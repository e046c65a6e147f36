use taskdeck_core::{StoreError, Tag, TagRegistry, Task, TaskCollection};

fn tag(name: &str) -> Tag {
    Tag::new(name).expect("test tag name should be alphanumeric")
}

fn task(description: &str) -> Task {
    Task::new(description, [])
}

#[test]
fn collection_add_appends_in_insertion_order() {
    let mut tasks = TaskCollection::new();
    tasks.add(task("first")).unwrap();
    tasks.add(task("second")).unwrap();
    tasks.add(task("third")).unwrap();

    let descriptions: Vec<&str> = tasks
        .iter()
        .map(|stored| stored.description.as_str())
        .collect();
    assert_eq!(descriptions, ["first", "second", "third"]);
}

#[test]
fn collection_add_rejects_value_equal_duplicate() {
    let mut tasks = TaskCollection::new();
    tasks.add(task("first")).unwrap();
    tasks.add(task("second")).unwrap();

    let err = tasks.add(task("first")).unwrap_err();
    assert_eq!(err, StoreError::DuplicateTask);
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks.get(0).unwrap().description, "first");
    assert_eq!(tasks.get(1).unwrap().description, "second");
}

#[test]
fn update_at_rejects_invalid_index() {
    let mut tasks = TaskCollection::new();
    tasks.add(task("only")).unwrap();

    let err = tasks.update_at(5, task("edited")).unwrap_err();
    assert_eq!(err, StoreError::IndexOutOfRange { index: 5, len: 1 });
    assert_eq!(tasks.get(0).unwrap().description, "only");
}

#[test]
fn update_at_rejects_duplicate_of_other_element() {
    let mut tasks = TaskCollection::new();
    tasks.add(task("first")).unwrap();
    tasks.add(task("second")).unwrap();

    let err = tasks.update_at(1, task("first")).unwrap_err();
    assert_eq!(err, StoreError::DuplicateTask);
    assert_eq!(tasks.get(1).unwrap().description, "second");
}

#[test]
fn update_at_accepts_equal_value_in_same_slot() {
    let mut tasks = TaskCollection::new();
    tasks.add(task("first")).unwrap();
    tasks.add(task("second")).unwrap();

    tasks.update_at(0, task("first")).unwrap();
    assert_eq!(tasks.get(0).unwrap().description, "first");
}

#[test]
fn update_at_replaces_in_place_without_moving_neighbors() {
    let mut tasks = TaskCollection::new();
    tasks.add(task("first")).unwrap();
    tasks.add(task("second")).unwrap();
    tasks.add(task("third")).unwrap();

    tasks.update_at(1, task("edited")).unwrap();

    let descriptions: Vec<&str> = tasks
        .iter()
        .map(|stored| stored.description.as_str())
        .collect();
    assert_eq!(descriptions, ["first", "edited", "third"]);
}

#[test]
fn remove_reports_whether_a_match_existed() {
    let mut tasks = TaskCollection::new();
    tasks.add(task("first")).unwrap();
    tasks.add(task("second")).unwrap();

    assert!(tasks.remove(&task("first")));
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks.get(0).unwrap().description, "second");

    assert!(!tasks.remove(&task("missing")));
    assert_eq!(tasks.len(), 1);
}

#[test]
fn collection_replace_all_is_atomic_on_duplicate_input() {
    let mut tasks = TaskCollection::new();
    tasks.add(task("kept")).unwrap();

    let err = tasks
        .replace_all(vec![task("a"), task("b"), task("a")])
        .unwrap_err();
    assert_eq!(err, StoreError::DuplicateTask);
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks.get(0).unwrap().description, "kept");

    tasks.replace_all(vec![task("a"), task("b")]).unwrap();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks.get(0).unwrap().description, "a");
}

#[test]
fn registry_add_rejects_equal_member() {
    let mut tags = TagRegistry::new();
    tags.add(tag("work")).unwrap();

    let err = tags.add(tag("work")).unwrap_err();
    assert_eq!(err, StoreError::DuplicateTag);
    assert_eq!(tags.len(), 1);
}

#[test]
fn registry_merge_from_inserts_only_unseen_members() {
    let mut tags = TagRegistry::new();
    tags.add(tag("work")).unwrap();

    tags.merge_from([tag("home"), tag("work"), tag("urgent"), tag("home")]);

    let names: Vec<&str> = tags.iter().map(Tag::name).collect();
    assert_eq!(names, ["work", "home", "urgent"]);
}

#[test]
fn registry_replace_all_is_atomic_on_duplicate_input() {
    let mut tags = TagRegistry::new();
    tags.add(tag("kept")).unwrap();

    let err = tags
        .replace_all(vec![tag("a"), tag("a")])
        .unwrap_err();
    assert_eq!(err, StoreError::DuplicateTag);
    assert_eq!(tags.len(), 1);
    assert!(tags.contains(&tag("kept")));
}

#[test]
fn registry_equality_can_ignore_member_order() {
    let left = TagRegistry::from_tags(vec![tag("a"), tag("b")]).unwrap();
    let right = TagRegistry::from_tags(vec![tag("b"), tag("a")]).unwrap();

    assert_ne!(left, right);
    assert!(left.eq_order_insensitive(&right));

    let shorter = TagRegistry::from_tags(vec![tag("a")]).unwrap();
    assert!(!left.eq_order_insensitive(&shorter));
}
