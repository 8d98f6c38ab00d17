use school_core::{
    Course, CourseRepository, EntityKind, EntityStore, Exam, ExamRepository, RepoError, Repository,
};
use uuid::Uuid;

#[test]
fn course_create_and_get_roundtrip() {
    let store = EntityStore::new();
    let repo = CourseRepository::new(&store);

    let mut input = Course::new("ICS", "C# programming");
    input.id = Uuid::from_u128(5);
    let id = repo.create(Some(input)).unwrap();

    assert_ne!(id, Uuid::from_u128(5));
    let loaded = repo.get_by_id(id).unwrap();
    assert_eq!(loaded.id, id);
    assert_eq!(loaded.name, "ICS");
    assert_eq!(loaded.description, "C# programming");
}

#[test]
fn course_update_applies_whitelisted_fields() {
    let store = EntityStore::new();
    let repo = CourseRepository::new(&store);
    let id = repo.create(Some(Course::new("ICS", "draft"))).unwrap();

    let updated = repo
        .update(Some(Course::with_id(id, "IW5", "web development")))
        .unwrap();

    assert_eq!(updated, Course::with_id(id, "IW5", "web development"));
    assert_eq!(repo.get_by_id(id).unwrap(), updated);
}

#[test]
fn exam_update_keeps_other_collections_untouched() {
    let store = EntityStore::new();
    let courses = CourseRepository::new(&store);
    let exams = ExamRepository::new(&store);
    courses.create(Some(Course::new("ICS", "C#"))).unwrap();
    let exam_id = exams.create(Some(Exam::new("Midterm"))).unwrap();
    let courses_before = courses.list_all();

    let mut changes = Exam::with_id(exam_id, "Final");
    changes.scheduled_at = Some(1_700_000_000_000);
    let updated = exams.update(Some(changes)).unwrap();

    assert_eq!(updated.title, "Final");
    assert_eq!(updated.scheduled_at, Some(1_700_000_000_000));
    assert_eq!(courses.list_all(), courses_before);
}

#[test]
fn absent_arguments_are_rejected_without_side_effects() {
    let store = EntityStore::new();
    let repo = ExamRepository::new(&store);

    assert_eq!(
        repo.create(None).unwrap_err(),
        RepoError::InvalidArgument("entity")
    );
    assert_eq!(
        repo.update(None).unwrap_err(),
        RepoError::InvalidArgument("entity")
    );
    assert_eq!(store.counts().exams, 0);
}

#[test]
fn missing_ids_fail_with_not_found() {
    let store = EntityStore::new();
    let repo = CourseRepository::new(&store);
    let missing = Uuid::new_v4();
    let expected = RepoError::NotFound {
        kind: EntityKind::Course,
        id: missing,
    };

    assert_eq!(repo.get_by_id(missing).unwrap_err(), expected);
    assert_eq!(
        repo.update(Some(Course::with_id(missing, "x", "y")))
            .unwrap_err(),
        expected
    );
    assert_eq!(repo.delete(missing).unwrap_err(), expected);
}

#[test]
fn delete_removes_only_the_target_and_is_not_repeatable() {
    let store = EntityStore::new();
    let repo = ExamRepository::new(&store);
    let first = repo.create(Some(Exam::new("First"))).unwrap();
    let second = repo.create(Some(Exam::new("Second"))).unwrap();

    repo.delete(first).unwrap();

    let remaining: Vec<_> = repo.list_all().into_iter().map(|e| e.id).collect();
    assert_eq!(remaining, vec![second]);
    assert!(matches!(
        repo.delete(first),
        Err(RepoError::NotFound {
            kind: EntityKind::Exam,
            ..
        })
    ));
}

#[test]
fn duplicate_course_ids_surface_ambiguous_match() {
    let store = EntityStore::new();
    let repo = CourseRepository::new(&store);
    let id = Uuid::from_u128(11);
    {
        let mut collections = store.write();
        collections.courses.push(Course::with_id(id, "one", ""));
        collections.courses.push(Course::with_id(id, "two", ""));
    }

    assert!(matches!(
        repo.get_by_id(id),
        Err(RepoError::AmbiguousMatch { count: 2, .. })
    ));
    assert!(matches!(
        repo.delete(id),
        Err(RepoError::AmbiguousMatch { count: 2, .. })
    ));
    assert_eq!(store.counts().courses, 2);
}

#[test]
fn list_all_keeps_insertion_order() {
    let store = EntityStore::new();
    let repo = CourseRepository::new(&store);
    for name in ["c", "a", "b"] {
        repo.create(Some(Course::new(name, ""))).unwrap();
    }

    let names: Vec<_> = repo.list_all().into_iter().map(|c| c.name).collect();
    assert_eq!(names, ["c", "a", "b"]);
}
