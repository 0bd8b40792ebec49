//! One-shot commands
//!
//! Each command performs exactly one API call, prints the outcome and returns
//! it. Failures print the same operation message the TUI shows.

use crate::api::StudentApi;
use crate::api::error::RequestError;
use crate::api::models::{CreateStudentInput, DeleteConfirmation, StatisticsSummary, Student};
use crate::config::Config;
use crate::ui::utils::{format_grade, format_optional_grade};
use crate::ui::views::{create, list, statistics};
use crossterm::style::Stylize;
use std::error::Error;
use std::fmt::Display;
use std::path::Path;

const GET_FAILED: &str = "Failed to load student";
const UPDATE_FAILED: &str = "Failed to update student";

fn format_student_row(student: &Student) -> String {
    format!(
        "{:<36}  {:<24}  {:>3}  {:>5}",
        student.id,
        student.name,
        student.age,
        format_grade(student.grade)
    )
}

fn print_student(student: &Student) {
    println!("{}", format_student_row(student));
}

fn print_done(message: impl Display) {
    println!("{} {}", "✔".green().bold(), message);
}

/// Failures go to stderr so stdout stays parseable.
fn print_failure(message: impl Display) {
    eprintln!("{} {}", "✘".red().bold(), message);
}

/// Prints the operation message and hands the error back for the exit status.
fn report(operation: &str, err: RequestError) -> Box<dyn Error> {
    print_failure(format_args!("{}: {}", operation, err));
    Box::new(err)
}

pub async fn list_students(api: &dyn StudentApi) -> Result<Vec<Student>, Box<dyn Error>> {
    let students = api
        .list_students()
        .await
        .map_err(|e| report(list::LOAD_FAILED, e))?;
    if students.is_empty() {
        println!("{}", "No students found".dark_grey());
    }
    students.iter().for_each(print_student);
    Ok(students)
}

pub async fn show_student(api: &dyn StudentApi, id: &str) -> Result<Student, Box<dyn Error>> {
    let student = api
        .get_student(id)
        .await
        .map_err(|e| report(GET_FAILED, e))?;
    print_student(&student);
    Ok(student)
}

/// Validates locally first; an invalid input never reaches the API.
pub async fn add_student(
    api: &dyn StudentApi,
    input: CreateStudentInput,
) -> Result<Student, Box<dyn Error>> {
    if let Err(e) = input.validate() {
        print_failure(e);
        return Err(Box::new(e));
    }
    let student = api
        .create_student(&input)
        .await
        .map_err(|e| report(create::ADD_FAILED, e))?;
    print_done(format_args!("Student added with ID {}", student.id));
    print_student(&student);
    Ok(student)
}

/// Same local validation as [`add_student`].
pub async fn update_student(
    api: &dyn StudentApi,
    id: &str,
    input: CreateStudentInput,
) -> Result<Student, Box<dyn Error>> {
    if let Err(e) = input.validate() {
        print_failure(e);
        return Err(Box::new(e));
    }
    let student = api
        .update_student(id, &input)
        .await
        .map_err(|e| report(UPDATE_FAILED, e))?;
    print_done(format_args!("Student {} updated", student.id));
    print_student(&student);
    Ok(student)
}

pub async fn delete_student(
    api: &dyn StudentApi,
    id: &str,
) -> Result<DeleteConfirmation, Box<dyn Error>> {
    let confirmation = api
        .delete_student(id)
        .await
        .map_err(|e| report(list::DELETE_FAILED, e))?;
    print_done(format_args!("{} ({})", confirmation.message, id));
    Ok(confirmation)
}

pub async fn show_statistics(api: &dyn StudentApi) -> Result<StatisticsSummary, Box<dyn Error>> {
    let stats = api
        .get_statistics()
        .await
        .map_err(|e| report(statistics::LOAD_FAILED, e))?;
    println!("Total Students: {}", stats.total_students);
    println!("Average Grade:  {}", format_grade(stats.average_grade));
    println!("Highest Grade:  {}", format_optional_grade(stats.highest_grade));
    println!("Lowest Grade:   {}", format_optional_grade(stats.lowest_grade));
    Ok(stats)
}

/// Stores the given settings in the config file, keeping the ones not given.
///
/// A file that no longer parses is replaced.
pub fn configure(
    path: &Path,
    api_url: Option<String>,
    with_background_color: Option<bool>,
) -> Result<Config, Box<dyn Error>> {
    let mut config = match Config::load_or_default(path) {
        Ok(config) => config,
        Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
            eprintln!(
                "{} Replacing unreadable config {}: {}",
                "!".yellow().bold(),
                path.display(),
                e
            );
            Config::default()
        }
        Err(e) => return Err(e.into()),
    };
    if let Some(api_url) = api_url {
        config.api_url = Some(api_url);
    }
    if let Some(with_background_color) = with_background_color {
        config.with_background_color = with_background_color;
    }
    config
        .save(path)
        .map_err(|e| format!("Failed to save config: {}", e))?;
    print_done(format_args!("Configuration saved to {}", path.display()));
    Ok(config)
}
