use crate::error::{HeroError, HeroResult};
use crate::model::Model;

pub fn register(model: &mut dyn Model, username: &str, password: &str) -> HeroResult<()> {
    model.register(username.trim(), password)
}

pub fn login(model: &mut dyn Model, username: &str, password: &str) -> HeroResult<String> {
    let username = username.trim();
    model.login(username, password)?;
    Ok(username.to_string())
}

/// Returns the name of the user that was logged out.
pub fn logout(model: &mut dyn Model) -> HeroResult<String> {
    let username = model
        .accounts_manager()
        .current_user()
        .map(str::to_string)
        .ok_or(HeroError::UserLogout)?;
    model.logout()?;
    Ok(username)
}

pub fn require_login(model: &dyn Model) -> HeroResult<()> {
    if model.accounts_manager().is_logged_in() {
        Ok(())
    } else {
        Err(HeroError::NotLoggedIn)
    }
}
