//! advisor CLI
//!
//! Command-line interface for browsing course data and prerequisites.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use advisor_catalog::{Course, CourseCatalog, load_catalog};

#[derive(Parser)]
#[command(name = "advisor")]
#[command(about = "Browse courses and their prerequisites", long_about = None)]
struct Cli {
    /// Course data file to load at startup
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print all courses in alphanumeric order
    List,

    /// Print one course's title and prerequisites
    Lookup {
        /// Course number (e.g., CSCI101)
        code: String,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let catalog = match cli.file {
        Some(ref path) => try_load(path),
        None => None,
    };

    match cli.command {
        Some(Commands::List) => {
            if catalog.is_none() {
                print_nothing_loaded();
                std::process::exit(1);
            }
            run_list(catalog.as_ref());
        }
        Some(Commands::Lookup { code }) => {
            if catalog.is_none() {
                print_nothing_loaded();
                std::process::exit(1);
            }
            run_lookup(catalog.as_ref(), &code);
        }
        None => run_menu(catalog),
    }
}

/// Load a course data file, reporting the outcome on the console.
///
/// Returns `None` on failure so the caller keeps whatever catalog it
/// already had.
fn try_load(path: &Path) -> Option<CourseCatalog> {
    match load_catalog(path) {
        Ok(catalog) => {
            println!(
                "{} Loaded {} courses from {}",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                catalog.len(),
                path.display().if_supports_color(Stdout, |t| t.cyan()),
            );
            Some(catalog)
        }
        Err(e) => {
            eprintln!(
                "{} Failed to load {}: {}",
                "\u{2718}".if_supports_color(Stdout, |t| t.red()),
                path.display(),
                e,
            );
            None
        }
    }
}

fn print_nothing_loaded() {
    println!(
        "{}",
        "No courses loaded. Load a data file first.".if_supports_color(Stdout, |t| t.dimmed()),
    );
}

/// Print the sorted course listing.
fn run_list(catalog: Option<&CourseCatalog>) {
    let Some(catalog) = catalog else {
        print_nothing_loaded();
        return;
    };

    println!();
    println!(
        "{}",
        "List of All Courses (Alphanumeric Order):".if_supports_color(Stdout, |t| t.bold()),
    );
    println!();
    for course in catalog.courses_sorted() {
        println!(
            "  {}: {}",
            course.code.if_supports_color(Stdout, |t| t.cyan()),
            course.title,
        );
    }
}

/// Print one course's details, resolving prerequisite titles.
fn run_lookup(catalog: Option<&CourseCatalog>, code: &str) {
    let Some(catalog) = catalog else {
        print_nothing_loaded();
        return;
    };

    match catalog.find(code) {
        Ok(course) => print_course_detail(catalog, course),
        Err(e) => {
            eprintln!(
                "{} {}",
                "\u{2718}".if_supports_color(Stdout, |t| t.red()),
                e,
            );
        }
    }
}

fn print_course_detail(catalog: &CourseCatalog, course: &Course) {
    println!();
    println!(
        "{}",
        "Course Information:".if_supports_color(Stdout, |t| t.bold()),
    );
    println!();
    println!(
        "  Course Number: {}",
        course.code.if_supports_color(Stdout, |t| t.cyan()),
    );
    println!("  Course Title:  {}", course.title);
    println!(
        "  Prerequisites: {}",
        format_prerequisites(catalog, course),
    );
}

/// Render a course's prerequisites as `CODE (Title)` pairs.
///
/// A prerequisite whose code is not in the catalog renders with the
/// `Unknown` sentinel; a course with no prerequisites renders as `None`.
fn format_prerequisites(catalog: &CourseCatalog, course: &Course) -> String {
    let resolved = catalog.resolve_prerequisites(course);
    if resolved.is_empty() {
        return "None".to_string();
    }
    resolved
        .iter()
        .map(|(code, title)| format!("{} ({})", code, title.unwrap_or("Unknown")))
        .collect::<Vec<_>>()
        .join(", ")
}

// ── Interactive menu ────────────────────────────────────────────────────────

fn print_menu() {
    println!();
    println!(
        "{}",
        "Advising Assistance Program".if_supports_color(Stdout, |t| t.bold()),
    );
    println!();
    println!("  1. Load course data");
    println!("  2. Print alphanumeric course list");
    println!("  3. Print course information");
    println!("  9. Exit");
    println!();
    print!("Enter your choice (1, 2, 3, or 9): ");
    std::io::stdout().flush().unwrap();
}

/// Read one trimmed line from stdin. Returns `None` on EOF.
fn read_line() -> Option<String> {
    let mut input = String::new();
    match std::io::stdin().read_line(&mut input) {
        Ok(0) => None,
        Ok(_) => Some(input.trim().to_string()),
        Err(_) => None,
    }
}

fn prompt(text: &str) -> Option<String> {
    print!("{text}");
    std::io::stdout().flush().unwrap();
    read_line()
}

/// Run the interactive menu loop.
///
/// The catalog is replaced only by a fully successful load; a failed load
/// leaves the current catalog queryable.
fn run_menu(mut catalog: Option<CourseCatalog>) {
    loop {
        print_menu();
        let Some(choice) = read_line() else {
            break;
        };

        match choice.as_str() {
            "1" => {
                let Some(name) = prompt("Enter the course data file name: ") else {
                    break;
                };
                if name.is_empty() {
                    eprintln!(
                        "{} File name cannot be empty.",
                        "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
                    );
                    continue;
                }
                if let Some(loaded) = try_load(Path::new(&name)) {
                    catalog = Some(loaded);
                }
            }
            "2" => run_list(catalog.as_ref()),
            "3" => {
                let Some(code) = prompt("Enter the course number (e.g., CSCI101): ") else {
                    break;
                };
                if code.is_empty() {
                    eprintln!(
                        "{} Course number cannot be empty.",
                        "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
                    );
                    continue;
                }
                run_lookup(catalog.as_ref(), &code);
            }
            "9" => {
                println!("Goodbye!");
                break;
            }
            other => {
                eprintln!(
                    "{} Invalid choice \"{}\". Please enter 1, 2, 3, or 9.",
                    "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
                    other,
                );
            }
        }
    }
}
