use std::fmt;

use anyhow::Result;
use inquire::{InquireError, Password, Select, Text};
use tracing::{error, info};

use crate::config::Config;
use crate::session::{AuthState, Credentials, Role, Session};
use crate::views::{self, members, newsletter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    List,
    Add,
    Delete,
    Edit,
    Newsletter,
    YearEnd,
    Logout,
    Quit,
}

impl MenuItem {
    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::List => "Ledenlijst",
            MenuItem::Add => "Lid Toevoegen",
            MenuItem::Delete => "Lid Verwijderen",
            MenuItem::Edit => "Lid Aanpassen",
            MenuItem::Newsletter => "Nieuwsbrief versturen",
            MenuItem::YearEnd => "Jaarafsluiting",
            MenuItem::Logout => "Afmelden",
            MenuItem::Quit => "Afsluiten",
        }
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The menu a role gets to see. Bestuur is read-only.
pub fn menu_items(role: Role) -> Vec<MenuItem> {
    match role {
        Role::Administrator => vec![
            MenuItem::List,
            MenuItem::Add,
            MenuItem::Delete,
            MenuItem::Edit,
            MenuItem::Newsletter,
            MenuItem::YearEnd,
            MenuItem::Logout,
            MenuItem::Quit,
        ],
        Role::Bestuur => vec![MenuItem::List, MenuItem::Logout, MenuItem::Quit],
    }
}

/// Prompt until a login succeeds. None means the operator backed out.
fn login(credentials: &Credentials) -> Result<Option<Session>> {
    let mut state = AuthState::NotAuthenticated;
    loop {
        if state == AuthState::Failed {
            println!("Gebruikersnaam of wachtwoord is onjuist.");
        }

        let username = match views::optional(Text::new("Gebruikersnaam").prompt())? {
            Some(value) => value,
            None => return Ok(None),
        };
        let password = match views::optional(
            Password::new("Wachtwoord").without_confirmation().prompt(),
        )? {
            Some(value) => value,
            None => return Ok(None),
        };

        state = credentials.authenticate(&username, &password);
        if let AuthState::Authenticated(session) = &state {
            info!(user = session.username.as_str(), "login ok");
            return Ok(Some(session.clone()));
        }
        info!(user = username.as_str(), "login rejected");
    }
}

/// Login, then hand the menu choices to the views until the operator
/// logs out (back to login) or quits.
pub async fn run(config: &Config) -> Result<()> {
    let credentials = Credentials::from_users(&config.users);
    println!("Kennisbeurs Druivenstreek - Ledenlijst");
    println!();

    loop {
        let session = match login(&credentials)? {
            Some(session) => session,
            None => return Ok(()),
        };
        println!("Welkom {}.", session.name);

        'menu: loop {
            println!();
            let choice = match Select::new("Menu", menu_items(session.role)).prompt() {
                Ok(choice) => choice,
                Err(InquireError::OperationCanceled) => break 'menu,
                Err(InquireError::OperationInterrupted) => return Ok(()),
                Err(err) => return Err(err.into()),
            };

            let result = match choice {
                MenuItem::List => members::list(config).await,
                MenuItem::Add => members::add(config).await,
                MenuItem::Delete => members::delete(config).await,
                MenuItem::Edit => members::edit(config).await,
                MenuItem::Newsletter => newsletter::send(config).await,
                MenuItem::YearEnd => members::year_end(config).await,
                MenuItem::Logout => break 'menu,
                MenuItem::Quit => return Ok(()),
            };
            if let Err(err) = result {
                error!(error = ?err, "view failed");
                println!("Er is een fout opgetreden, probeer later opnieuw.");
            }
        }
        info!(user = session.username.as_str(), "logout");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_items_administrator() {
        let items = menu_items(Role::Administrator);
        assert_eq!(items.first(), Some(&MenuItem::List));
        assert!(items.contains(&MenuItem::Add));
        assert!(items.contains(&MenuItem::Delete));
        assert!(items.contains(&MenuItem::Edit));
        assert!(items.contains(&MenuItem::Newsletter));
        assert!(items.contains(&MenuItem::YearEnd));
    }

    #[test]
    fn test_menu_items_bestuur_is_read_only() {
        let items = menu_items(Role::Bestuur);
        assert_eq!(items, vec![MenuItem::List, MenuItem::Logout, MenuItem::Quit]);
    }

    #[test]
    fn test_menu_labels() {
        assert_eq!(MenuItem::List.label(), "Ledenlijst");
        assert_eq!(MenuItem::Add.label(), "Lid Toevoegen");
        assert_eq!(MenuItem::Delete.label(), "Lid Verwijderen");
        assert_eq!(MenuItem::Edit.label(), "Lid Aanpassen");
    }
}
