use clap::{Parser, Subcommand};
use pulse_core::calendar::{month_name, WEEKDAY_LABELS};
use pulse_core::schedule::WorkoutTemplate;
use pulse_core::*;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pulse")]
#[command(about = "Mood wheel and training calendar companion", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a month of the training calendar (default)
    Calendar {
        /// Year to show (defaults to config)
        #[arg(long)]
        year: Option<i32>,

        /// Zero-based month to show, 0 = January (defaults to config)
        #[arg(long)]
        month: Option<u32>,

        /// Navigate this many months from the chosen month
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        offset: i32,

        /// Day to highlight as selected
        #[arg(long)]
        selected: Option<u32>,

        /// Put a template on a day: DAY=TEMPLATE (number or title, repeatable)
        #[arg(long, value_parser = parse_assignment)]
        assign: Vec<(u32, WorkoutTemplate)>,

        /// Clear the workout on a day (repeatable)
        #[arg(long)]
        remove: Vec<u32>,
    },

    /// Resolve a pointer position on the mood wheel
    Mood {
        /// Pointer x in wheel coordinates
        #[arg(allow_negative_numbers = true, value_parser = parse_coordinate)]
        x: f64,

        /// Pointer y in wheel coordinates
        #[arg(allow_negative_numbers = true, value_parser = parse_coordinate)]
        y: f64,
    },

    /// Feed a drag gesture (x,y samples) through the mood wheel
    ///
    /// Samples with a negative coordinate go after `--`.
    MoodTrace {
        #[arg(required = true, value_parser = parse_point)]
        samples: Vec<Point>,
    },

    /// Show the mood check-in history, optionally recording new check-ins
    MoodHistory {
        /// Mood to check in with now (repeatable, oldest first)
        #[arg(long, value_parser = parse_mood)]
        record: Vec<Mood>,
    },

    /// List the built-in workout templates
    Templates,
}

fn main() -> Result<()> {
    // Initialize logging
    pulse_core::logging::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    tracing::debug!("Using config: {:?}", config);

    match cli.command {
        Some(Commands::Calendar {
            year,
            month,
            offset,
            selected,
            assign,
            remove,
        }) => {
            let view = CalendarArgs {
                year,
                month,
                offset,
                selected,
                assign,
                remove,
            };
            cmd_calendar(&config, view, cli.json)
        }
        Some(Commands::Mood { x, y }) => cmd_mood(&config, Point::new(x, y), cli.json),
        Some(Commands::MoodTrace { samples }) => cmd_mood_trace(&config, samples, cli.json),
        Some(Commands::MoodHistory { record }) => cmd_mood_history(&config, record, cli.json),
        Some(Commands::Templates) => cmd_templates(cli.json),
        None => {
            // Default to "calendar" command
            cmd_calendar(&config, CalendarArgs::default(), cli.json)
        }
    }
}

fn parse_coordinate(s: &str) -> std::result::Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|e| format!("bad coordinate '{}': {}", s, e))?;
    if !value.is_finite() {
        return Err(format!("coordinates must be finite: '{}'", s));
    }
    Ok(value)
}

fn parse_point(s: &str) -> std::result::Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got '{}'", s))?;
    Ok(Point::new(parse_coordinate(x)?, parse_coordinate(y)?))
}

fn parse_assignment(s: &str) -> std::result::Result<(u32, WorkoutTemplate), String> {
    let (day, template) = s
        .split_once('=')
        .ok_or_else(|| format!("expected DAY=TEMPLATE but got '{}'", s))?;
    let day: u32 = day
        .trim()
        .parse()
        .map_err(|e| format!("bad day in '{}': {}", s, e))?;
    let template = find_template(template)
        .ok_or_else(|| format!("unknown workout template '{}'", template.trim()))?;
    Ok((day, *template))
}

fn parse_mood(s: &str) -> std::result::Result<Mood, String> {
    Mood::from_label(s).map_err(|e| e.to_string())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

// ============================================================================
// Calendar
// ============================================================================

#[derive(Serialize)]
struct CalendarView<'a> {
    year: i32,
    month: u32,
    month_name: &'static str,
    selected_day: Option<u32>,
    cells: Vec<MarkedCell>,
    workouts: Vec<ScheduleRow<'a>>,
}

#[derive(Default)]
struct CalendarArgs {
    year: Option<i32>,
    month: Option<u32>,
    offset: i32,
    selected: Option<u32>,
    assign: Vec<(u32, WorkoutTemplate)>,
    remove: Vec<u32>,
}

fn cmd_calendar(config: &Config, args: CalendarArgs, json: bool) -> Result<()> {
    let start_year = args.year.unwrap_or(config.calendar.initial_year);
    let start_month = args.month.unwrap_or(config.calendar.initial_month);

    // Validate before navigating so a bad --month is reported as given
    days_in_month(start_year, start_month)?;
    let (year, month) = advance_month(start_year, start_month, args.offset);
    let days = days_in_month(year, month)?;

    // Any navigation resets the selection to the 1st
    let is_initial_view =
        (year, month) == (config.calendar.initial_year, config.calendar.initial_month);
    let default_day = if args.offset == 0 && is_initial_view {
        config.calendar.selected_day
    } else {
        1
    };
    let selected_day = args
        .selected
        .or(Some(default_day))
        .filter(|day| (1..=days).contains(day));

    let mut schedule = Schedule::seeded();
    let mut notes = Vec::new();
    for day in &args.remove {
        let key = checked_key(year, month, days, *day)?;
        match schedule.remove(&key) {
            Some(workout) => notes.push(format!("✓ Removed {} from {}", workout.title, key)),
            None => notes.push(format!("No workout on {}", key)),
        }
    }
    for (day, template) in &args.assign {
        let key = checked_key(year, month, days, *day)?;
        schedule.assign(key.clone(), template.to_entry());
        notes.push(format!("✓ Added {} on {}", template.title, key));
    }

    let cells = build_month_grid(year, month)?;
    let today = chrono::Local::now().date_naive();
    let marked = mark_cells(&cells, year, month, &schedule, selected_day, today);
    let workouts: Vec<_> = schedule
        .month_rows(year, month)?
        .into_iter()
        .filter(|row| row.workout.is_some())
        .collect();
    let name = month_name(month).unwrap_or("?");

    if json {
        return print_json(&CalendarView {
            year,
            month,
            month_name: name,
            selected_day,
            cells: marked,
            workouts,
        });
    }

    for note in &notes {
        println!("{}", note);
    }
    println!("\n  {} {}", name, year);
    println!();
    let header: Vec<String> = WEEKDAY_LABELS.iter().map(|l| format!("{:^5}", l)).collect();
    println!("  {}", header.join(" "));
    for week in marked.chunks(7) {
        let row: Vec<String> = week.iter().map(render_cell).collect();
        println!("  {}", row.join(" "));
    }
    println!();
    println!("  * workout   [..] selected   ! today   (..) other month");
    println!();

    if let Some(day) = selected_day {
        let key = date_key(year, month, day);
        match schedule.get(&key) {
            Some(workout) => println!("  {}: {} ({})", key, workout.title, workout.time),
            None => println!("  {}: Rest day", key),
        }
        println!();
    }

    if workouts.is_empty() {
        println!("  No workouts scheduled this month");
    } else {
        println!("  Scheduled workouts:");
        for row in &workouts {
            if let Some(workout) = row.workout {
                println!(
                    "    {} {:>2}  {} ({})",
                    row.day_name, row.day, workout.title, workout.time
                );
            }
        }
    }
    println!();
    println!("  {} workouts scheduled in total", schedule.total_workouts());

    Ok(())
}

fn checked_key(year: i32, month: u32, days: u32, day: u32) -> Result<String> {
    if !(1..=days).contains(&day) {
        let date = format!("day {} of {}-{:02}", day, year, month + 1);
        return Err(Error::InvalidDate(date));
    }
    Ok(date_key(year, month, day))
}

fn render_cell(marked: &MarkedCell) -> String {
    let day = marked.cell.day_of_month;
    let body = if !marked.cell.belongs_to_displayed_month {
        format!("({:>2})", day)
    } else if marked.selected {
        format!("[{:>2}]", day)
    } else {
        format!(" {:>2} ", day)
    };
    let flag = if marked.has_workout {
        '*'
    } else if marked.today {
        '!'
    } else {
        ' '
    };
    format!("{}{}", body, flag)
}

// ============================================================================
// Mood Wheel
// ============================================================================

#[derive(Serialize)]
struct MoodReport {
    angle: f64,
    center: Point,
    radius: f64,
    handle: Point,
    handle_radius: f64,
    mood: Mood,
    label: &'static str,
    emoji: &'static str,
    color: &'static str,
    tip: &'static str,
}

fn mood_selector(config: &Config) -> AngleSelector {
    AngleSelector::new(
        config.wheel.center(),
        config.wheel.radius,
        mood_wheel().clone(),
    )
}

fn cmd_mood(config: &Config, pointer: Point, json: bool) -> Result<()> {
    let selector = mood_selector(config);
    let selection = selector.sample(pointer);
    let mood = Mood::from_marker(selection.marker)?;

    if json {
        return print_json(&MoodReport {
            angle: selection.state.current_angle,
            center: selector.center(),
            radius: selector.radius(),
            handle: selection.state.handle_position,
            handle_radius: config.wheel.handle_radius,
            mood,
            label: mood.label(),
            emoji: mood.emoji(),
            color: mood.color(),
            tip: mood.tip(),
        });
    }

    println!("\n  {} {}", mood.emoji(), mood.label());
    println!();
    println!("  Angle:  {:.1}°", selection.state.current_angle);
    println!(
        "  Handle: ({:.1}, {:.1}) r={:.0} on ring r={:.0} around ({:.1}, {:.1})",
        selection.state.handle_position.x,
        selection.state.handle_position.y,
        config.wheel.handle_radius,
        selector.radius(),
        selector.center().x,
        selector.center().y
    );
    println!();
    println!("  {}", mood.tip());
    println!();

    Ok(())
}

#[derive(Serialize)]
struct TraceReport {
    changes: Vec<Mood>,
    logged: MoodEntry,
    history_len: usize,
}

fn cmd_mood_trace(config: &Config, samples: Vec<Point>, json: bool) -> Result<()> {
    let selector = mood_selector(config);
    let mut tracker = SnapTracker::new();
    let mut changes = Vec::new();
    let mut last_angle = Mood::default().angle();

    selector.drag(samples, |selection| {
        last_angle = selection.state.current_angle;
        if tracker.observe(selection.marker) {
            changes.push(selection.marker.clone());
        }
    });

    let changes = changes
        .iter()
        .map(Mood::from_marker)
        .collect::<Result<Vec<_>>>()?;
    let final_mood = changes.last().copied().unwrap_or_default();

    let mut log = MoodLog::seeded(config.mood.history_limit);
    let logged = log
        .record(final_mood, chrono::Local::now().naive_local())
        .clone();

    if json {
        return print_json(&TraceReport {
            changes,
            logged,
            history_len: log.len(),
        });
    }

    println!();
    for mood in &changes {
        println!("  → {} {}", mood.emoji(), mood.label());
    }
    println!();
    println!(
        "✓ Checked in as {} at {:.1}° ({}, {})",
        logged.mood,
        last_angle,
        logged.date_label(),
        logged.time_label()
    );
    println!("  History: {} check-ins", log.len());

    Ok(())
}

#[derive(Serialize)]
struct HistoryRow {
    mood: Mood,
    emoji: &'static str,
    date: String,
    time: String,
}

#[derive(Serialize)]
struct HistoryReport {
    limit: usize,
    entries: Vec<HistoryRow>,
}

fn cmd_mood_history(config: &Config, record: Vec<Mood>, json: bool) -> Result<()> {
    let mut log = MoodLog::seeded(config.mood.history_limit);
    let now = chrono::Local::now().naive_local();
    for mood in record {
        log.record(mood, now);
    }

    let entries: Vec<HistoryRow> = log
        .entries()
        .map(|entry| HistoryRow {
            mood: entry.mood,
            emoji: entry.mood.emoji(),
            date: entry.date_label(),
            time: entry.time_label(),
        })
        .collect();

    if json {
        return print_json(&HistoryReport {
            limit: log.limit(),
            entries,
        });
    }

    println!("\n  Mood history ({} of {}):", entries.len(), log.limit());
    for row in &entries {
        let label = row.mood.label();
        println!("    {} {:<10} {:>6}  {}", row.emoji, label, row.date, row.time);
    }
    println!();

    Ok(())
}

// ============================================================================
// Templates
// ============================================================================

fn cmd_templates(json: bool) -> Result<()> {
    let entries: Vec<WorkoutEntry> = WORKOUT_TEMPLATES.iter().map(|t| t.to_entry()).collect();

    if json {
        return print_json(&entries);
    }

    println!("\n  Workout templates:");
    for (i, entry) in entries.iter().enumerate() {
        println!("    {}. {:<16} {}", i + 1, entry.title, entry.time);
    }
    println!();

    Ok(())
}
