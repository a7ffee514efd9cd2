use timetable_core::{Event, ScheduleConfig, Scheduler};

fn main() {
    timetable_core::init_tracing();

    let events = vec![
        Event {
            name: "breakfast".to_string(),
            category: "meal".to_string(),
            unit: "meal".to_string(),
            amount: None,
            divisor: None,
            frequency: "1x daily".to_string(),
            constraints: Vec::new(),
            windows: vec!["07:00-09:30".to_string()],
            note: None,
        },
        Event {
            name: "paracetamol".to_string(),
            category: "medicine".to_string(),
            unit: "dose".to_string(),
            amount: Some(500.0),
            divisor: None,
            frequency: "2x daily".to_string(),
            constraints: vec!["≥8h apart".to_string(), "≥0.5h after breakfast".to_string()],
            windows: Vec::new(),
            note: None,
        },
    ];

    let scheduler = match Scheduler::new(events) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("could not build catalog: {e}");
            std::process::exit(1);
        }
    };

    let config = ScheduleConfig::default();
    match scheduler.solve(&config) {
        Ok(rows) => {
            for row in rows {
                println!("{} [{}] {}", row.entity_name, row.instance, row.time_hhmm);
            }
        }
        Err(e) => {
            eprintln!("solve failed: {e}");
            std::process::exit(1);
        }
    }
}
