use anyhow::Result;
use menu_manager::{
    MenuConfig, MenuSession, MenuSettings, OutputFormat, Renderer, SequentialIds, Shell,
};
use std::io::{Cursor, Write};
use tempfile::NamedTempFile;

fn run_script(settings: MenuSettings, format: OutputFormat, script: &str) -> Result<(String, usize)> {
    let renderer = Renderer::new(format, settings.currency_symbol.clone());
    let session = MenuSession::with_id_generator(settings, SequentialIds::new());
    let mut shell = Shell::new(session, renderer);

    let mut output = Vec::new();
    let summary = shell.run(Cursor::new(script), &mut output)?;
    Ok((String::from_utf8(output)?, summary.errors))
}

/// Add, remove and overview through the text front end.
#[test]
fn test_text_session_end_to_end() -> Result<()> {
    let script = "\
add Soup | Tomato soup | Starters | 25.00
add Salad | | starters | 35
add Steak | Aged rump | Mains | 180.5

averages
remove 3
menu
";
    let (output, errors) = run_script(MenuSettings::default(), OutputFormat::Text, script)?;
    assert_eq!(errors, 0);

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "Added Soup (Starters) - R25.00 [id: item-1]");
    assert_eq!(lines[1], "Added Salad (Starters) - R35.00 [id: item-2]");
    assert_eq!(lines[2], "Added Steak (Mains) - R180.50 [id: item-3]");
    assert!(output.contains("Starters    30.00"));
    assert!(output.contains("Mains       180.50"));
    assert!(output.contains("Removed Steak (Mains) [id: item-3]"));
    assert!(output.contains("Christoffel's Cooking Menu\nTotal Menu Items: 2"));
    assert!(output.ends_with("1. Soup (Starters) - R25.00\n   Tomato soup\n2. Salad (Starters) - R35.00\n"));
    Ok(())
}

/// Errors are reported inline and the session keeps going.
#[test]
fn test_errors_do_not_stop_the_session() -> Result<()> {
    let script = "\
add | no name | Starters | 10
add Cake | | Desserts | ten
add Pie | | Drinks | 10
dance
remove item-99
filter desserts
add Cake | Chocolate | Desserts | 40
filter desserts
";
    let (output, errors) = run_script(MenuSettings::default(), OutputFormat::Text, script)?;
    assert_eq!(errors, 4);

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "error: Missing required field: name");
    assert!(lines[1].starts_with("error: Invalid price 'ten'"));
    assert_eq!(lines[2], "error: Unknown course: Drinks");
    assert_eq!(lines[3], "error: Unknown command: dance");
    assert_eq!(lines[4], "No menu item matches item-99; menu unchanged");
    assert_eq!(lines[5], "No Desserts on the menu");
    // Failed adds do not consume ids.
    assert_eq!(lines[6], "Added Cake (Desserts) - R40.00 [id: item-1]");
    assert_eq!(lines[7], "Desserts:");
    assert_eq!(lines[8], "- Cake - R40.00");
    Ok(())
}

/// A line with invalid UTF-8 is rejected on its own; later commands still run.
#[test]
fn test_non_utf8_line_does_not_end_the_session() -> Result<()> {
    let settings = MenuSettings::default();
    let renderer = Renderer::new(OutputFormat::Text, settings.currency_symbol.clone());
    let session = MenuSession::with_id_generator(settings, SequentialIds::new());
    let mut shell = Shell::new(session, renderer);

    let mut input = Vec::new();
    input.extend_from_slice(b"add Soup | | Starters | 25\n");
    input.extend_from_slice(b"add Caf\xe9 | | Mains | 10\n");
    input.extend_from_slice(b"add Salad | | Starters | 35\nmenu\n");

    let mut output = Vec::new();
    let summary = shell.run(Cursor::new(input), &mut output)?;
    assert_eq!(summary.commands, 4);
    assert_eq!(summary.errors, 1);
    assert_eq!(shell.session().store().len(), 2);

    let output = String::from_utf8(output)?;
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "Added Soup (Starters) - R25.00 [id: item-1]");
    assert!(lines[1].starts_with("error: Unreadable input"));
    assert_eq!(lines[2], "Added Salad (Starters) - R35.00 [id: item-2]");
    assert!(output.contains("Total Menu Items: 2"));
    Ok(())
}

/// Removing through the shell reports the id and count in JSON.
#[test]
fn test_json_remove_carries_id_and_count() -> Result<()> {
    let script = "add Soup | | Starters | 25\nremove 1\nremove 1\n";
    let (output, _) = run_script(MenuSettings::default(), OutputFormat::Json, script)?;
    let values: Vec<serde_json::Value> = output
        .lines()
        .map(serde_json::from_str)
        .collect::<std::result::Result<_, _>>()?;
    assert_eq!(values[1]["outcome"], "removed");
    assert_eq!(values[1]["id"], "item-1");
    assert_eq!(values[1]["removed"], 1);
    assert_eq!(values[2]["id"], serde_json::Value::Null);
    assert_eq!(values[2]["removed"], 0);
    Ok(())
}

#[test]
fn test_quit_stops_reading() -> Result<()> {
    let script = "add Soup | | Starters | 25\nquit\nadd Salad | | Starters | 35\n";
    let (output, _) = run_script(MenuSettings::default(), OutputFormat::Text, script)?;
    assert!(output.ends_with("Goodbye\n"));
    assert!(!output.contains("Salad"));
    Ok(())
}

#[test]
fn test_json_output() -> Result<()> {
    let script = "add Soup | | Starters | 25\nadd Salad | | Starters | 35\naverages\nbogus\n";
    let (output, errors) = run_script(MenuSettings::default(), OutputFormat::Json, script)?;
    assert_eq!(errors, 1);

    let values: Vec<serde_json::Value> = output
        .lines()
        .map(serde_json::from_str)
        .collect::<std::result::Result<_, _>>()?;
    assert_eq!(values[0]["outcome"], "added");
    assert_eq!(values[2]["outcome"], "averages");
    assert_eq!(values[2]["averages"][0]["course"], "Starters");
    assert_eq!(values[2]["averages"][0]["average"], "30.00");
    assert_eq!(values[2]["averages"][2]["average"], "0.00");
    assert_eq!(values[3]["outcome"], "error");
    Ok(())
}

/// Settings file drives title, currency, summary order and the default course.
#[test]
fn test_settings_file_shapes_output() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    write!(
        file,
        r#"
[menu]
title = "Harbour Grill"
currency_symbol = "$"
summary_courses = ["Desserts", "Starters"]
default_course = "Desserts"
"#
    )?;
    let config = MenuConfig::from_file(file.path())?;

    let script = "add Tart | Lemon | | 12.5\nfilter\nmenu\n";
    let (output, errors) = run_script(config.menu, OutputFormat::Text, script)?;
    assert_eq!(errors, 0);
    assert!(output.contains("Added Tart (Desserts) - $12.50"));
    assert!(output.contains("Desserts:\n- Tart - $12.50\n   Lemon"));
    assert!(output.contains("Harbour Grill\nTotal Menu Items: 1"));
    assert!(output.contains("Course      Average Price ($)\nDesserts    12.50\nStarters    0.00"));
    Ok(())
}
