//! Interactive terminal shell
//!
//! Composes the list controller, detail view and edit panel behind a simple
//! menu loop. Page fetches are performed inline: the list shows its loading
//! placeholder, the pending ticket is resolved, and the menu is redrawn.

use crate::catalog::{CatalogClient, ShowId};
use crate::controller::{LoadStatus, ShowListController};
use crate::detail::render_details;
use crate::edit_panel::{DraftField, EditDraft};
use crate::list_view::{display_page, page_from_display, render_list, show_row};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use thiserror::Error;

/// Errors that end the interactive session
#[derive(Debug, Error)]
pub enum ShellError {
    /// Reading from or writing to the terminal failed
    #[error("Terminal interaction failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Actions offered in the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    Search,
    ClearSearch,
    ViewDetails,
    EditShow,
    NextPage,
    PreviousPage,
    GoToPage,
    Retry,
    Quit,
}

impl Action {
    fn label(&self) -> &'static str {
        match self {
            Action::Search => "Search shows",
            Action::ClearSearch => "Clear search",
            Action::ViewDetails => "View details",
            Action::EditShow => "Edit show",
            Action::NextPage => "Next page",
            Action::PreviousPage => "Previous page",
            Action::GoToPage => "Go to page",
            Action::Retry => "Retry",
            Action::Quit => "Quit",
        }
    }
}

/// Menu actions that make sense for the controller's current state
pub(crate) fn available_actions(controller: &ShowListController) -> Vec<Action> {
    let mut actions = Vec::new();

    if controller.status() == LoadStatus::Error {
        actions.push(Action::Retry);
    }
    if controller.status() == LoadStatus::Loaded {
        actions.push(Action::Search);
        if !controller.search_query().is_empty() {
            actions.push(Action::ClearSearch);
        }
        if !controller.visible_shows().is_empty() {
            actions.push(Action::ViewDetails);
            actions.push(Action::EditShow);
        }
    }
    if controller.has_more_pages() {
        actions.push(Action::NextPage);
    }
    if controller.page() > 0 {
        actions.push(Action::PreviousPage);
    }
    actions.push(Action::GoToPage);
    actions.push(Action::Quit);

    actions
}

/// Runs the dashboard until the user quits
pub fn run_shell<C: CatalogClient>(catalog: &C, start_page: u32) -> Result<(), ShellError> {
    let theme = ColorfulTheme::default();
    let mut controller = ShowListController::new(start_page);
    controller.mount();

    loop {
        if controller.pending().is_some() {
            println!("\n{}", render_list(&controller));
            controller.load_with(catalog);
        }
        println!("\n{}", render_list(&controller));

        let actions = available_actions(&controller);
        let labels: Vec<&str> = actions.iter().map(Action::label).collect();
        let Some(choice) = Select::with_theme(&theme)
            .with_prompt("What would you like to do?")
            .items(&labels)
            .default(0)
            .interact_opt()?
        else {
            return Ok(());
        };

        match actions[choice] {
            Action::Search => {
                let query: String = Input::with_theme(&theme)
                    .with_prompt("Search shows")
                    .with_initial_text(controller.search_query())
                    .allow_empty(true)
                    .interact_text()?;
                controller.set_search_query(query);
            }
            Action::ClearSearch => controller.set_search_query(""),
            Action::ViewDetails => {
                if let Some(id) = pick_show(&theme, &controller, "View which show?")? {
                    view_show(&theme, &mut controller, id)?;
                }
            }
            Action::EditShow => {
                if let Some(id) = pick_show(&theme, &controller, "Edit which show?")? {
                    controller.select_for_edit(id);
                    edit_show(&theme, &mut controller)?;
                }
            }
            Action::NextPage => {
                controller.next_page();
            }
            Action::PreviousPage => {
                controller.previous_page();
            }
            Action::GoToPage => {
                let number: u64 = Input::with_theme(&theme)
                    .with_prompt("Go to page")
                    .default(display_page(controller.page()))
                    .validate_with(|number: &u64| match page_from_display(*number) {
                        Some(_) => Ok(()),
                        None => Err(format!(
                            "Enter a page between 1 and {}",
                            display_page(u32::MAX)
                        )),
                    })
                    .interact_text()?;
                if let Some(page) = page_from_display(number) {
                    controller.change_page(page);
                }
            }
            Action::Retry => {
                controller.retry();
            }
            Action::Quit => return Ok(()),
        }
    }
}

/// Lets the user choose one of the currently visible shows
fn pick_show(
    theme: &ColorfulTheme,
    controller: &ShowListController,
    prompt: &str,
) -> Result<Option<ShowId>, ShellError> {
    let shows = controller.visible_shows();
    let labels: Vec<String> = shows.iter().map(|show| show_row(show)).collect();

    let choice = Select::with_theme(theme)
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact_opt()?;

    Ok(choice.map(|index| shows[index].id))
}

fn view_show(
    theme: &ColorfulTheme,
    controller: &mut ShowListController,
    id: ShowId,
) -> Result<(), ShellError> {
    controller.select_for_view(id);
    if let Some(details) = render_details(controller.selected_for_view()) {
        println!("\n{details}");
        Select::with_theme(theme)
            .items(&["Close"])
            .default(0)
            .interact_opt()?;
    }
    controller.close_view();
    Ok(())
}

/// Edit panel loop for the show currently selected for editing
fn edit_show(theme: &ColorfulTheme, controller: &mut ShowListController) -> Result<(), ShellError> {
    let Some(original) = controller.selected_for_edit().cloned() else {
        return Ok(());
    };
    let mut draft = EditDraft::from_show(&original);

    const SAVE: usize = 7;
    const CANCEL: usize = 8;

    loop {
        println!("\n=== Edit Show ===");
        for field in DraftField::REQUIRED {
            println!("{:<14} {}", format!("{field}:"), draft.field(field));
        }
        println!("{:<14} {}", "Genres:", draft.genres().join(", "));
        println!(
            "{:<14} {}",
            "Official Site:",
            draft.official_site().unwrap_or_default()
        );

        let items = [
            "Edit show name",
            "Edit type",
            "Edit language",
            "Edit status",
            "Add genre",
            "Remove genre",
            "Edit official site",
            "Save changes",
            "Cancel",
        ];
        let choice = Select::with_theme(theme)
            .with_prompt("Edit")
            .items(&items)
            .default(SAVE)
            .interact_opt()?
            .unwrap_or(CANCEL);

        match choice {
            0..=3 => {
                let field = DraftField::REQUIRED[choice];
                let value: String = Input::with_theme(theme)
                    .with_prompt(field.label())
                    .with_initial_text(draft.field(field))
                    .allow_empty(true)
                    .interact_text()?;
                draft.set_field(field, &value);
            }
            4 => {
                let genre: String = Input::with_theme(theme)
                    .with_prompt("New genre")
                    .allow_empty(true)
                    .interact_text()?;
                if !draft.add_genre(&genre) {
                    tracing::debug!(%genre, "ignored blank or duplicate genre");
                }
            }
            5 => {
                if draft.genres().is_empty() {
                    continue;
                }
                let genres = draft.genres().to_vec();
                if let Some(index) = Select::with_theme(theme)
                    .with_prompt("Remove which genre?")
                    .items(&genres)
                    .default(0)
                    .interact_opt()?
                {
                    draft.remove_genre(&genres[index]);
                }
            }
            6 => {
                let site: String = Input::with_theme(theme)
                    .with_prompt("Official site")
                    .with_initial_text(draft.official_site().unwrap_or_default())
                    .allow_empty(true)
                    .interact_text()?;
                draft.set_official_site(&site);
            }
            SAVE => match draft.submit(&original) {
                Ok(updated) => {
                    controller.apply_update(updated);
                    println!("Changes saved.");
                    return Ok(());
                }
                Err(error) => println!("Cannot save: {error}"),
            },
            _ => {
                let unchanged = draft == EditDraft::from_show(&original);
                if unchanged
                    || Confirm::with_theme(theme)
                        .with_prompt("Discard your changes?")
                        .default(false)
                        .interact()?
                {
                    controller.close_edit();
                    return Ok(());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::show;
    use crate::catalog::FetchError;

    fn loaded(shows: Vec<crate::catalog::Show>) -> ShowListController {
        let mut controller = ShowListController::new(0);
        let ticket = controller.mount();
        controller.resolve(ticket, Ok(shows));
        controller
    }

    #[test]
    fn test_actions_while_loading() {
        let mut controller = ShowListController::new(0);
        controller.mount();
        assert_eq!(
            available_actions(&controller),
            vec![Action::GoToPage, Action::Quit]
        );
    }

    #[test]
    fn test_actions_for_loaded_page() {
        let controller = loaded(vec![show(1, "Lost")]);
        assert_eq!(
            available_actions(&controller),
            vec![
                Action::Search,
                Action::ViewDetails,
                Action::EditShow,
                Action::NextPage,
                Action::GoToPage,
                Action::Quit,
            ]
        );
    }

    #[test]
    fn test_actions_for_filtered_out_page() {
        let mut controller = loaded(vec![show(1, "Lost")]);
        controller.set_search_query("xyz");
        let actions = available_actions(&controller);

        assert!(actions.contains(&Action::ClearSearch));
        assert!(!actions.contains(&Action::ViewDetails));
        assert!(!actions.contains(&Action::EditShow));
    }

    #[test]
    fn test_actions_after_failure() {
        let mut controller = ShowListController::new(2);
        let ticket = controller.mount();
        controller.resolve(ticket, Err(FetchError::Status { status: 500 }));

        assert_eq!(
            available_actions(&controller),
            vec![
                Action::Retry,
                Action::PreviousPage,
                Action::GoToPage,
                Action::Quit,
            ]
        );
    }

    #[test]
    fn test_actions_on_last_page() {
        let mut controller = ShowListController::new(0);
        let ticket = controller.change_page(7);
        controller.resolve(ticket, Ok(Vec::new()));
        let actions = available_actions(&controller);

        assert!(!actions.contains(&Action::NextPage));
        assert!(actions.contains(&Action::PreviousPage));
    }
}
