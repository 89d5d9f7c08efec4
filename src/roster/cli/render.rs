use colored::Colorize;
use roster::api::Statistics;
use roster::model::{Grade, Student};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const TABLE_WIDTH: usize = 80;
const ID_WIDTH: usize = 5;
const NAME_WIDTH: usize = 20;
const COURSE_WIDTH: usize = 15;
const MARKS_WIDTH: usize = 6;
const GRADE_WIDTH: usize = 5;

pub(super) fn rule(ch: char, width: usize) -> String {
    ch.to_string().repeat(width)
}

/// Banner used for the menu sections: a rule, a centered title, a rule.
pub(super) fn section(title: &str, width: usize) -> String {
    let padding = width.saturating_sub(title.width()) / 2;
    format!(
        "\n{}\n{}{}\n{}\n",
        rule('-', width),
        " ".repeat(padding),
        title.bold(),
        rule('-', width)
    )
}

pub(super) fn render_table(students: &[Student]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} | {} | {} | {} | {}\n",
        pad_to_width("ID", ID_WIDTH),
        pad_to_width("NAME", NAME_WIDTH),
        pad_to_width("COURSE", COURSE_WIDTH),
        pad_to_width("MARKS", MARKS_WIDTH),
        pad_to_width("GRADE", GRADE_WIDTH),
    ));
    out.push_str(&rule('-', TABLE_WIDTH));
    out.push('\n');
    for student in students {
        out.push_str(&render_row(student));
        out.push('\n');
    }
    out.push_str(&rule('-', TABLE_WIDTH));
    out.push('\n');
    out
}

fn render_row(student: &Student) -> String {
    format!(
        "{} | {} | {} | {:<marks$.2} | {}",
        pad_to_width(&student.id().to_string(), ID_WIDTH),
        pad_to_width(student.name(), NAME_WIDTH),
        pad_to_width(student.course(), COURSE_WIDTH),
        student.marks(),
        student.grade(),
        marks = MARKS_WIDTH,
    )
    .trim_end()
    .to_string()
}

pub(super) fn render_details(student: &Student) -> String {
    let status = if student.is_passing() {
        student.status_label().green()
    } else {
        student.status_label().red()
    };
    format!(
        "{rule}\nID: {}\nName: {}\nCourse: {}\nMarks: {}\nGrade: {}\nStatus: {}\n{rule}\n",
        student.id(),
        student.name(),
        student.course(),
        student.marks(),
        student.grade(),
        status,
        rule = rule('-', 50),
    )
}

pub(super) fn render_search_results(results: &[Student]) -> String {
    if results.is_empty() {
        return "No students found matching your search criteria.\n".to_string();
    }
    format!(
        "\nSearch results:\n{}\n{}Found {} student(s).\n",
        rule('-', TABLE_WIDTH),
        render_table(results),
        results.len()
    )
}

pub(super) fn render_statistics(stats: &Statistics) -> String {
    let mut out = String::new();
    out.push_str(&format!("Total Students: {}\n", stats.total()));
    out.push_str(&format!("Average Marks: {:.2}\n", stats.average_marks()));
    out.push_str(&format!("Highest Marks: {:.2}\n", stats.highest_marks()));
    out.push_str(&format!("Lowest Marks: {:.2}\n", stats.lowest_marks()));

    if let Some(top) = stats.top_student() {
        out.push_str(&format!("\n{}\n", "Top Performer:".bold()));
        out.push_str(&format!(
            "  {} ({}) - {:.2}\n",
            top.name(),
            top.course(),
            top.marks()
        ));
    }

    out.push_str(&format!("\n{}\n", "Pass/Fail Statistics:".bold()));
    out.push_str(&format!(
        "  Passing: {} ({:.1}%)\n",
        stats.passing_count(),
        stats.passing_percentage()
    ));
    out.push_str(&format!(
        "  Failing: {} ({:.1}%)\n",
        stats.failing_count(),
        stats.failing_percentage()
    ));

    out.push_str(&format!("\n{}\n", "Grade Distribution:".bold()));
    for grade in Grade::ALL {
        let count = stats.grade_count(grade);
        if count > 0 {
            out.push_str(&format!(
                "  {}: {} student(s) ({:.1}%)\n",
                grade,
                count,
                stats.grade_percentage(grade)
            ));
        }
    }

    if let Some(grade) = stats.most_common_grade() {
        out.push_str(&format!("\nMost Common Grade: {}\n", grade));
    }
    out
}

/// Pad (or truncate with an ellipsis) to an exact display width.
fn pad_to_width(s: &str, width: usize) -> String {
    let truncated = truncate_to_width(s, width);
    let padding = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
