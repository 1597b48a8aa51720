//! Account and session commands.

use super::CliError;

/// Verify credentials against the backend.
///
/// The password always comes from `BILLFOLD_PASSWORD`; the username from
/// the `-u` flag or `BILLFOLD_USERNAME`.
#[allow(clippy::print_stdout)]
pub async fn login(username: Option<&str>) -> Result<(), CliError> {
    let username = match username {
        Some(u) => u.to_string(),
        None => std::env::var("BILLFOLD_USERNAME")
            .map_err(|_| CliError::MissingEnvVar("BILLFOLD_USERNAME"))?,
    };
    let password = std::env::var("BILLFOLD_PASSWORD")
        .map_err(|_| CliError::MissingEnvVar("BILLFOLD_PASSWORD"))?;

    let client = super::client()?;
    client.login(&username, &password).await?;

    println!("Signed in as {username}");
    Ok(())
}

/// Show the signed-in user's details.
#[allow(clippy::print_stdout)]
pub async fn me() -> Result<(), CliError> {
    let client = super::authenticated_client().await?;
    let user = client.me().await?;

    println!("id:       {}", user.id);
    println!("username: {}", user.username);
    if let Some(email) = &user.email {
        println!("email:    {email}");
    }
    Ok(())
}
