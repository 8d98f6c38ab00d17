use school_core::{EntityStore, InMemoryStudentRepository, RepoError, StudentService};
use uuid::Uuid;

#[test]
fn enroll_rename_withdraw_flow() {
    let store = EntityStore::new();
    let service = StudentService::new(InMemoryStudentRepository::new(&store));

    let id = service.enroll("Ann", "Main St", "Brno").unwrap();
    let enrolled = service.get(id).unwrap();
    assert_eq!(enrolled.name, "Ann");
    assert_eq!(enrolled.address.street, "Main St");

    let renamed = service.rename(id, "Anna").unwrap();
    assert_eq!(renamed.name, "Anna");
    assert_eq!(renamed.address, enrolled.address);
    assert_eq!(service.list(), vec![renamed]);

    service.withdraw(id).unwrap();
    assert!(service.list().is_empty());
    assert_eq!(store.counts().addresses, 0);
}

#[test]
fn rename_and_withdraw_unknown_student_fail() {
    let store = EntityStore::new();
    let service = StudentService::new(InMemoryStudentRepository::new(&store));
    let missing = Uuid::new_v4();

    assert!(matches!(
        service.rename(missing, "Nobody"),
        Err(RepoError::NotFound { .. })
    ));
    assert!(matches!(
        service.withdraw(missing),
        Err(RepoError::NotFound { .. })
    ));
}
