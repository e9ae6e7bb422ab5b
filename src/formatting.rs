//! Formatting helper functions for the catalog MCP server
//!
//! Renders query views, statistics and command outcomes as plain text.

use crate::catalog::{
    Achievement, Catalog, Category, CategoryStats, CommandOutcome, Course, CourseStats,
    ProgressEntry, ProgressSummary, Resource, ResourceStats,
};

fn progress_label(progress: Option<u8>) -> String {
    match progress {
        Some(p) => format!("{}%", p),
        None => "not started".to_string(),
    }
}

/// Render an hour count with at most two decimals and no trailing zeros
fn format_hours(hours: f64) -> String {
    let fixed = format!("{:.2}", hours);
    fixed
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

fn push_course(result: &mut String, course: &Course) {
    result.push_str(&format!(
        "- [{}] {} ({}, {}h, progress: {})\n",
        course.id,
        course.name,
        course.category,
        format_hours(course.hours),
        progress_label(course.progress)
    ));
    result.push_str(&format!("  {}\n", course.description));
}

/// Format the course list with its statistics
///
/// # Arguments
/// * `courses` - Filtered and sorted course view
/// * `stats` - Statistics over the full course collection
pub fn format_courses(courses: &[&Course], stats: &CourseStats) -> String {
    let mut result = format!(
        "Total courses: {} | Filtered results: {} | Avg progress: {}% | Total hours: {}h\n\n",
        stats.total, stats.filtered, stats.average_progress,
        format_hours(stats.total_hours)
    );

    if courses.is_empty() {
        result.push_str("No courses found. Try adjusting your search terms or filters.");
        return result;
    }

    for course in courses {
        push_course(&mut result, course);
    }
    result
}

/// Format a course's resources with completion statistics
pub fn format_resources(course: &Course, resources: &[&Resource], stats: &ResourceStats) -> String {
    let mut result = format!("{} [{}]\n", course.name, course.category);
    result.push_str(&format!(
        "Course progress: {}/{} resources completed ({}%)\n",
        stats.completed, stats.total, stats.completion_percentage
    ));
    result.push_str(&format!(
        "Total resources: {} | Completed: {} | Remaining: {} | Filtered results: {}\n\n",
        stats.total, stats.completed, stats.remaining, stats.filtered
    ));

    if resources.is_empty() {
        result.push_str("No resources found. Try adjusting your search terms or filters.");
        return result;
    }

    for resource in resources {
        let mark = if resource.completed { "x" } else { " " };
        result.push_str(&format!(
            "- [{}] {} ({}, id: {})\n",
            mark, resource.title, resource.kind, resource.id
        ));
        result.push_str(&format!("  {}\n", resource.description));
        result.push_str(&format!("  URL: {}\n", resource.url));
    }
    result
}

/// Format the category grid with its statistics
pub fn format_categories(categories: &[&Category], stats: &CategoryStats) -> String {
    let mut result = format!(
        "Total categories: {} | Total courses: {} | Avg per category: {}\n\n",
        stats.total, stats.total_courses, stats.average_courses
    );

    if categories.is_empty() {
        result.push_str("No categories found. Try adjusting your search terms.");
        return result;
    }

    for category in categories {
        result.push_str(&format!(
            "- {} {} [{}] ({} courses available)\n",
            category.icon, category.name, category.id, category.course_count
        ));
        result.push_str(&format!("  {}\n", category.description));
    }
    result
}

/// Format the progress dashboard
pub fn format_progress(
    entries: &[&ProgressEntry],
    summary: &ProgressSummary,
    achievements: &[Achievement],
) -> String {
    let mut result = format!(
        "Overall progress: {}% | Courses completed: {} ({} in progress) | Hours spent: {}h | Streak: {} days\n\n",
        summary.overall_progress,
        summary.completed,
        summary.in_progress,
        format_hours(summary.hours_spent),
        summary.streak
    );

    result.push_str("Course progress:\n");
    if entries.is_empty() {
        result.push_str("  No courses accessed in this period.\n");
    }
    for entry in entries {
        result.push_str(&format!(
            "- {} ({}, {}): {}% ({}h / {}h), last accessed {}\n",
            entry.name,
            entry.category,
            entry.status.label(),
            entry.progress,
            format_hours(entry.completed_hours),
            format_hours(entry.total_hours),
            entry.last_accessed
        ));
    }

    if !achievements.is_empty() {
        result.push_str("\nAchievements:\n");
        for achievement in achievements {
            result.push_str(&format!(
                "- {} {} ({})\n",
                achievement.icon, achievement.name, achievement.date
            ));
        }
    }
    result
}

/// Format the home overview: headline numbers, featured courses, categories
pub fn format_overview(catalog: &Catalog) -> String {
    let stats = CourseStats::compute(&catalog.courses, catalog.courses.len());
    let mut result = format!(
        "Courses: {} | Categories: {} | Total hours: {}h\n\n",
        stats.total,
        catalog.categories.len(),
        format_hours(stats.total_hours)
    );

    result.push_str("Featured courses:\n");
    for course in catalog.featured_courses() {
        push_course(&mut result, course);
    }

    result.push_str("\nCategories:\n");
    for category in &catalog.categories {
        result.push_str(&format!(
            "- {} {} ({} courses)\n",
            category.icon, category.name, category.course_count
        ));
    }
    result
}

/// Format the result of a catalog command
pub fn format_outcome(outcome: &CommandOutcome) -> String {
    match outcome {
        CommandOutcome::Toggled {
            resource_id,
            completed,
        } => format!(
            "Resource {} marked as {}",
            resource_id,
            if *completed { "completed" } else { "not completed" }
        ),
        CommandOutcome::Unchanged => "No matching resource found; nothing changed".to_string(),
        CommandOutcome::BackendPending(ack) => {
            let prefix = if ack.destructive { "[destructive] " } else { "" };
            format!("{}{}: {}", prefix, ack.title, ack.description)
        }
    }
}
