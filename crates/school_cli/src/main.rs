//! CLI demo entry point.
//!
//! # Responsibility
//! - Drive the `school_core` repository contract end to end.
//! - Render store dumps to stdout.
//!
//! Logging is enabled only when `SCHOOL_LOG_DIR` is set; `SCHOOL_LOG_LEVEL`
//! overrides the build-mode default level.

use log::info;
use school_core::{
    core_version, default_log_level, init_logging, Course, CourseRepository, EntityStore, Exam,
    ExamRepository, InMemoryStudentRepository, RepoResult, Repository, StoreSnapshot,
    StudentService,
};

const LOG_DIR_ENV: &str = "SCHOOL_LOG_DIR";
const LOG_LEVEL_ENV: &str = "SCHOOL_LOG_LEVEL";
const DUMP_RULE: &str = "--------------------------";

fn main() {
    println!("school_core version={}", core_version());
    init_logging_from_env();

    let store = EntityStore::new();
    if let Err(err) = run_demo(&store) {
        eprintln!("demo failed: {err}");
        std::process::exit(1);
    }
}

fn init_logging_from_env() {
    let Ok(log_dir) = std::env::var(LOG_DIR_ENV) else {
        return;
    };
    let level =
        std::env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| default_log_level().to_string());
    if let Err(err) = init_logging(&level, &log_dir) {
        eprintln!("logging disabled: {err}");
    }
}

fn run_demo(store: &EntityStore) -> RepoResult<()> {
    let courses = CourseRepository::new(store);
    let exams = ExamRepository::new(store);
    let students = StudentService::new(InMemoryStudentRepository::new(store));

    courses.create(Some(Course::new("ICS", "C# programming")))?;
    let mut exam = Exam::new("ICS midterm");
    exam.scheduled_at = Some(1_700_000_000_000);
    exams.create(Some(exam))?;

    let student_id = students.enroll("Ann", "Main St 1", "Brno")?;
    students.rename(student_id, "Anna")?;
    print_dump(&store.snapshot());

    students.withdraw(student_id)?;
    print_dump(&store.snapshot());

    let counts = store.counts();
    info!(
        "event=cli_demo module=cli status=ok students={} addresses={} courses={} exams={}",
        counts.students, counts.addresses, counts.courses, counts.exams
    );
    Ok(())
}

fn print_dump(snapshot: &StoreSnapshot) {
    println!("{DUMP_RULE}");
    println!("# Addresses:");
    snapshot.addresses.iter().for_each(|a| println!("{a}"));
    println!("# Courses:");
    snapshot.courses.iter().for_each(|c| println!("{c}"));
    println!("# Exams:");
    snapshot.exams.iter().for_each(|e| println!("{e}"));
    println!("# Students:");
    snapshot.students.iter().for_each(|s| println!("{s}"));
    println!("{DUMP_RULE}");
}
