// src/cli/planner.rs
// Interactive terminal walk through the wizard steps

use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::sync::Arc;
use std::time::Duration;

use crate::persona::{Persona, PersonaId};
use crate::services::ItineraryService;
use crate::wizard::{
    Advance, FieldDescriptor, FieldKind, StepKind, Wizard, WizardError, WizardResult,
};

/// The terminal session is a single owner for in-flight tracking
const CLI_OWNER: &str = "cli";

/// What a line of terminal input means to the planner
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Back,
    Quit,
    Text(String),
}

pub fn classify(input: &str) -> Line {
    let trimmed = input.trim();
    match trimmed.to_lowercase().as_str() {
        "back" | ":b" => Line::Back,
        "quit" | "exit" | ":q" => Line::Quit,
        _ => Line::Text(trimmed.to_string()),
    }
}

/// A 1-based menu number picks that option; anything else passes through
fn resolve_option<'a>(options: &[&'static str], token: &'a str) -> &'a str {
    token
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=options.len()).contains(n))
        .map(|n| options[n - 1])
        .unwrap_or(token)
}

/// Apply one field's raw input. Empty input leaves the field unchanged;
/// multi-select fields toggle each comma-separated choice.
pub fn apply_field_input(
    wizard: &mut Wizard,
    field: &FieldDescriptor,
    raw: &str,
) -> WizardResult<()> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(());
    }

    match field.kind {
        FieldKind::MultiSelect { options } => {
            // Parse everything first so a typo applies nothing
            let edits = raw
                .split(',')
                .map(str::trim)
                .filter(|choice| !choice.is_empty())
                .map(|choice| field.id.parse_edit(resolve_option(options, choice)))
                .collect::<WizardResult<Vec<_>>>()?;
            for edit in edits {
                wizard.edit(edit);
            }
        }
        FieldKind::Select { options } => {
            wizard.edit(field.id.parse_edit(resolve_option(options, raw))?);
        }
        _ => wizard.edit(field.id.parse_edit(raw)?),
    }
    Ok(())
}

/// Persona by menu number or id. `None` for anything unrecognized.
pub fn resolve_persona(options: &[Persona], raw: &str) -> Option<PersonaId> {
    match raw.trim().parse::<usize>() {
        Ok(n) if (1..=options.len()).contains(&n) => Some(options[n - 1].id),
        Ok(_) => None,
        Err(_) => raw.parse::<PersonaId>().ok(),
    }
}

enum StepOutcome {
    Next,
    Back,
    Quit,
    Finished(String),
}

pub struct Planner {
    editor: DefaultEditor,
    wizard: Wizard,
    itinerary: Option<Arc<ItineraryService>>,
}

impl Planner {
    /// `itinerary` of `None` stops after printing the compiled prompt
    pub fn new(itinerary: Option<Arc<ItineraryService>>) -> Result<Self> {
        let editor = DefaultEditor::new().context("Failed to create line editor")?;
        Ok(Self {
            editor,
            wizard: Wizard::new(),
            itinerary,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        println!("{}", style("Sardin.ai trip planner").cyan().bold());
        println!(
            "{}",
            style("Type 'back' to return to the previous step, 'quit' to exit.").dim()
        );

        let prompt = loop {
            match self.run_step()? {
                StepOutcome::Next => {}
                StepOutcome::Back => {
                    self.wizard.retreat();
                }
                StepOutcome::Quit => return Ok(()),
                StepOutcome::Finished(prompt) => break prompt,
            }
        };

        println!();
        println!("{}", style("Your itinerary prompt").green().bold());
        println!("{}", prompt);

        let Some(service) = self.itinerary.clone() else {
            return Ok(());
        };

        // A failed submission keeps the wizard state, so offer a retry
        loop {
            match generate(&service, &prompt).await {
                Ok(itinerary) => {
                    println!();
                    println!("{}", style("Your Sardinian itinerary").green().bold());
                    println!("{}", itinerary);
                    return Ok(());
                }
                Err(message) => {
                    println!("{}", style(message).red());
                    match self.read("Try again? [y/N] ")? {
                        Some(Line::Text(answer)) if answer.eq_ignore_ascii_case("y") => continue,
                        _ => return Ok(()),
                    }
                }
            }
        }
    }

    /// Read a line; `None` on Ctrl+D
    fn read(&mut self, prompt: &str) -> Result<Option<Line>> {
        loop {
            match self.editor.readline(prompt) {
                Ok(input) => {
                    if !input.trim().is_empty() {
                        let _ = self.editor.add_history_entry(input.as_str());
                    }
                    return Ok(Some(classify(&input)));
                }
                Err(ReadlineError::Interrupted) => {
                    println!("{}", style("(type 'quit' to exit)").dim());
                    continue;
                }
                Err(ReadlineError::Eof) => return Ok(None),
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn print_header(&self) {
        let (position, total) = self.wizard.progress();
        let step = self.wizard.current_step();
        println!();
        println!(
            "{} {}",
            style(format!("Step {} of {}", position, total)).dim(),
            style(step.title).bold()
        );
    }

    fn finish_advance(&mut self) -> StepOutcome {
        match self.wizard.advance() {
            Ok(Advance::Moved { .. }) => StepOutcome::Next,
            Ok(Advance::AtTerminal { prompt }) => StepOutcome::Finished(prompt),
            Err(e) => {
                print_error(&e);
                StepOutcome::Next
            }
        }
    }

    fn run_step(&mut self) -> Result<StepOutcome> {
        self.print_header();

        match self.wizard.current_step().kind {
            StepKind::FreeInput { placeholder } => self.free_input_step(placeholder),
            StepKind::PersonaChoice { options } => self.persona_step(options),
            StepKind::StructuredForm { fields } => self.form_step(fields),
        }
    }

    fn free_input_step(&mut self, placeholder: &str) -> Result<StepOutcome> {
        let current = self.wizard.preferences().freeform_notes.clone();
        if current.is_empty() {
            println!("{}", style(placeholder).dim());
        } else {
            println!("{} {}", style("Current:").dim(), current);
        }

        match self.read("> ")? {
            None | Some(Line::Quit) => Ok(StepOutcome::Quit),
            Some(Line::Back) => Ok(StepOutcome::Back),
            Some(Line::Text(text)) => {
                if !text.is_empty() {
                    self.wizard.set_freeform_notes(text);
                }
                Ok(self.finish_advance())
            }
        }
    }

    fn persona_step(&mut self, options: &'static [Persona]) -> Result<StepOutcome> {
        for (i, persona) in options.iter().enumerate() {
            println!(
                "  {} {} {}",
                style(format!("{}.", i + 1)).cyan(),
                style(persona.name).bold(),
                style(format!("- {}", persona.description)).dim()
            );
        }

        loop {
            match self.read("Choose a travel style (Enter to skip): ")? {
                None | Some(Line::Quit) => return Ok(StepOutcome::Quit),
                Some(Line::Back) => return Ok(StepOutcome::Back),
                Some(Line::Text(text)) if text.is_empty() => return Ok(self.finish_advance()),
                Some(Line::Text(text)) => match resolve_persona(options, &text) {
                    Some(id) => {
                        return Ok(match self.wizard.select_persona(id) {
                            Ok(Advance::AtTerminal { prompt }) => StepOutcome::Finished(prompt),
                            Ok(Advance::Moved { .. }) => StepOutcome::Next,
                            Err(e) => {
                                print_error(&e);
                                StepOutcome::Next
                            }
                        });
                    }
                    None => println!("{}", style(format!("Unknown choice: {}", text)).red()),
                },
            }
        }
    }

    fn form_step(&mut self, fields: &'static [FieldDescriptor]) -> Result<StepOutcome> {
        for field in fields {
            print_field_hint(field);
            loop {
                let current = field.id.display_value(self.wizard.preferences());
                let prompt = if current.is_empty() {
                    format!("{}: ", field.label)
                } else {
                    format!("{} [{}]: ", field.label, current)
                };

                match self.read(&prompt)? {
                    None | Some(Line::Quit) => return Ok(StepOutcome::Quit),
                    Some(Line::Back) => return Ok(StepOutcome::Back),
                    Some(Line::Text(text)) => match apply_field_input(&mut self.wizard, field, &text) {
                        Ok(()) => break,
                        Err(e) => print_error(&e),
                    },
                }
            }
        }

        Ok(self.finish_advance())
    }
}

fn print_field_hint(field: &FieldDescriptor) {
    let hint = match field.kind {
        FieldKind::Text { placeholder } | FieldKind::DateTime { placeholder } => {
            placeholder.to_string()
        }
        FieldKind::Select { options } => numbered(options),
        FieldKind::MultiSelect { options } => {
            format!("{} (comma-separated, repeats toggle off)", numbered(options))
        }
        FieldKind::Toggle { description } => format!("{} (y/n)", description),
    };
    if !hint.is_empty() {
        println!("{}", style(hint).dim());
    }
}

fn numbered(options: &[&str]) -> String {
    options
        .iter()
        .enumerate()
        .map(|(i, option)| format!("{}) {}", i + 1, option))
        .collect::<Vec<_>>()
        .join("  ")
}

fn print_error(err: &WizardError) {
    println!("{}", style(err.to_string()).red());
}

/// Submit with a spinner; the error is the user-facing message
async fn generate(service: &ItineraryService, prompt: &str) -> std::result::Result<String, String> {
    let spinner = ProgressBar::new_spinner();
    if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        spinner.set_style(spinner_style);
    }
    spinner.set_message("Generating your itinerary...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = service.submit(CLI_OWNER, prompt).await;
    spinner.finish_and_clear();
    result.map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persona;
    use crate::wizard::{FieldId, Interest, steps};

    fn field(id: FieldId) -> &'static FieldDescriptor {
        steps()
            .iter()
            .filter_map(|step| match step.kind {
                StepKind::StructuredForm { fields } => Some(fields),
                _ => None,
            })
            .flatten()
            .find(|f| f.id == id)
            .unwrap()
    }

    #[test]
    fn classify_commands() {
        assert_eq!(classify(" BACK "), Line::Back);
        assert_eq!(classify("quit"), Line::Quit);
        assert_eq!(classify(" Alghero "), Line::Text("Alghero".to_string()));
    }

    #[test]
    fn empty_input_leaves_field_unchanged() {
        let mut wizard = Wizard::new();
        apply_field_input(&mut wizard, field(FieldId::Location), "Alghero").unwrap();
        apply_field_input(&mut wizard, field(FieldId::Location), "   ").unwrap();
        assert_eq!(wizard.preferences().location, "Alghero");
    }

    #[test]
    fn multi_select_toggles_each_choice() {
        let mut wizard = Wizard::new();
        let interests = field(FieldId::Interests);

        apply_field_input(&mut wizard, interests, "hiking, 1, food/wine").unwrap();
        let selected: Vec<_> = wizard.preferences().interests.iter().copied().collect();
        assert_eq!(
            selected,
            vec![Interest::Beaches, Interest::Hiking, Interest::FoodWine]
        );

        apply_field_input(&mut wizard, interests, "Hiking").unwrap();
        assert!(!wizard.preferences().interests.contains(&Interest::Hiking));
    }

    #[test]
    fn bad_multi_select_choice_applies_nothing() {
        let mut wizard = Wizard::new();
        let err = apply_field_input(&mut wizard, field(FieldId::Interests), "Beaches, Skiing");
        assert!(err.is_err());
        assert!(wizard.preferences().interests.is_empty());
    }

    #[test]
    fn select_accepts_menu_numbers() {
        let mut wizard = Wizard::new();
        apply_field_input(&mut wizard, field(FieldId::GroupType), "3").unwrap();
        assert_eq!(
            wizard.preferences().group_type.map(|g| g.label()),
            Some("Family")
        );
    }

    #[test]
    fn persona_by_number_or_id() {
        let options = persona::all();
        assert_eq!(resolve_persona(options, "1"), Some(PersonaId::Adventurer));
        assert_eq!(resolve_persona(options, "culture"), Some(PersonaId::CultureSeeker));
        assert_eq!(resolve_persona(options, "9"), None);
        assert_eq!(resolve_persona(options, "astronaut"), None);
    }
}
