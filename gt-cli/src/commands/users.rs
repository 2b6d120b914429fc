//! User commands.

use clap::{Args, Subcommand};
use console::style;
use dialoguer::{Confirm, Password};

use gt_api::ApiClient;
use gt_core::error::GtResult;
use gt_models::{User, UserPassword, UserPermissions, UserProfileDto};

use super::{format_date, new_table, or_dash, print_json, print_status, prompt_error, yes_no};
use crate::OutputFormat;

#[derive(Subcommand)]
pub enum UsersAction {
    /// Show the signed-in user.
    Me,
    /// Show a user by ID.
    Get {
        /// User ID.
        id: u64,
    },
    /// List every user on the server.
    List,
    /// Search users by login, email or name.
    Search {
        /// Search query.
        #[arg(short, long)]
        query: Option<String>,
        /// Page size. Only sent together with --page.
        #[arg(long)]
        perpage: Option<u32>,
        /// Page number. Only sent together with --perpage.
        #[arg(long)]
        page: Option<u32>,
    },
    /// List the organizations a user belongs to.
    Orgs {
        /// User ID.
        id: u64,
    },
    /// List the teams a user belongs to.
    Teams {
        /// User ID.
        id: u64,
    },
    /// Create a new user.
    Create {
        #[arg(long)]
        login: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "")]
        name: String,
        /// Initial password. Prompted for when omitted.
        #[arg(long)]
        password: Option<String>,
    },
    /// Delete a user.
    Delete {
        /// User ID.
        id: u64,
        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
    /// Disable a user.
    Disable {
        /// User ID.
        id: u64,
    },
    /// Enable a user.
    Enable {
        /// User ID.
        id: u64,
    },
    /// Set a user's password.
    Password {
        /// User ID.
        id: u64,
        /// New password. Prompted for when omitted.
        #[arg(long)]
        password: Option<String>,
    },
    /// Grant or revoke Grafana server admin.
    Admin {
        /// User ID.
        id: u64,
        #[command(flatten)]
        change: AdminChange,
    },
    /// Update a user's profile. Only the given fields are sent.
    Update {
        /// User ID.
        id: u64,
        #[arg(long)]
        login: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        theme: Option<String>,
    },
}

/// Exactly one of `--grant` / `--revoke`.
#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct AdminChange {
    /// Make the user a server admin.
    #[arg(long)]
    grant: bool,
    /// Remove server admin from the user.
    #[arg(long)]
    revoke: bool,
}

impl AdminChange {
    fn permissions(&self) -> UserPermissions {
        UserPermissions {
            is_grafana_admin: self.grant && !self.revoke,
        }
    }
}

pub async fn run(api: &ApiClient, action: UsersAction, format: OutputFormat) -> GtResult<()> {
    match action {
        UsersAction::Me => {
            let user = api.get_actual_user().await?;
            print_user(&user, format)?;
        }
        UsersAction::Get { id } => {
            let user = api.get_user(id).await?;
            print_user(&user, format)?;
        }
        UsersAction::List => {
            let users = api.get_all_users().await?;
            print_users(&users, None, format)?;
        }
        UsersAction::Search { query, perpage, page } => {
            let result = api
                .search_users_with_paging(query.as_deref(), perpage, page)
                .await?;
            match format {
                OutputFormat::Json => print_json(&result)?,
                OutputFormat::Text => {
                    let footer = format!(
                        "page {} ({} per page), {} matching user(s)",
                        result.page, result.per_page, result.total_count
                    );
                    print_users(&result.users, Some(&footer), format)?;
                }
            }
        }
        UsersAction::Orgs { id } => {
            let orgs = api.get_user_orgs(id).await?;
            match format {
                OutputFormat::Json => print_json(&orgs)?,
                OutputFormat::Text => {
                    if orgs.is_empty() {
                        println!("User {id} belongs to no organization.");
                    } else {
                        let mut table = new_table(["Org ID", "Name", "Role"]);
                        for org in &orgs {
                            table.add_row(vec![
                                org.org_id.to_string(),
                                org.name.clone(),
                                org.role.clone(),
                            ]);
                        }
                        println!("{table}");
                    }
                }
            }
        }
        UsersAction::Teams { id } => {
            let teams = api.get_user_teams(id).await?;
            match format {
                OutputFormat::Json => print_json(&teams)?,
                OutputFormat::Text => super::teams::print_team_table(&teams),
            }
        }
        UsersAction::Create {
            login,
            email,
            name,
            password,
        } => {
            let password = match password {
                Some(p) => p,
                None => Password::new()
                    .with_prompt(format!("Password for {login}"))
                    .with_confirmation("Repeat password", "Passwords do not match")
                    .interact()
                    .map_err(prompt_error)?,
            };
            let user = User::new_account(&login, &email, &name, &password);
            let msg = api.create_user(&user).await?;
            print_status(&msg, "User created", format)?;
        }
        UsersAction::Delete { id, yes } => {
            if !yes {
                let user = api.get_user(id).await?;
                println!(
                    "  {} This permanently deletes user {} ({}).",
                    style("WARNING").red().bold(),
                    user.login,
                    or_dash(&user.email)
                );
                let confirmed = Confirm::new()
                    .with_prompt("  Are you sure?")
                    .default(false)
                    .interact()
                    .unwrap_or(false);
                if !confirmed {
                    println!("  Delete cancelled.");
                    return Ok(());
                }
            }
            let msg = api.delete_user(id).await?;
            print_status(&msg, "User deleted", format)?;
        }
        UsersAction::Disable { id } => {
            let msg = api.disable_user(id).await?;
            print_status(&msg, "User disabled", format)?;
        }
        UsersAction::Enable { id } => {
            let msg = api.enable_user(id).await?;
            print_status(&msg, "User enabled", format)?;
        }
        UsersAction::Password { id, password } => {
            let password = match password {
                Some(p) => p,
                None => Password::new()
                    .with_prompt("New password")
                    .with_confirmation("Repeat password", "Passwords do not match")
                    .interact()
                    .map_err(prompt_error)?,
            };
            let msg = api
                .update_user_password(&UserPassword { password }, id)
                .await?;
            print_status(&msg, "User password updated", format)?;
        }
        UsersAction::Admin { id, change } => {
            let msg = api.update_user_permissions(change.permissions(), id).await?;
            print_status(&msg, "User permissions updated", format)?;
        }
        UsersAction::Update {
            id,
            login,
            email,
            name,
            theme,
        } => {
            let profile = UserProfileDto {
                login,
                email,
                name,
                theme,
                ..UserProfileDto::default()
            };
            let msg = api.update_user(&profile, id).await?;
            print_status(&msg, "User updated", format)?;
        }
    }

    Ok(())
}

fn print_user(user: &User, format: OutputFormat) -> GtResult<()> {
    match format {
        OutputFormat::Json => print_json(user),
        OutputFormat::Text => {
            println!("{}", style(&user.login).bold().underlined());
            println!("  ID:           {}", user.id);
            println!("  Name:         {}", or_dash(&user.name));
            println!("  Email:        {}", or_dash(&user.email));
            println!("  Org ID:       {}", user.org_id);
            println!("  Server admin: {}", yes_no(user.is_grafana_admin));
            println!(
                "  Disabled:     {}",
                if user.is_disabled {
                    style("yes").red().to_string()
                } else {
                    "no".to_string()
                }
            );
            println!("  External:     {}", yes_no(user.is_external));
            if !user.auth_labels.is_empty() {
                println!("  Auth:         {}", user.auth_labels.join(", "));
            }
            println!("  Created:      {}", format_date(user.created_at.as_ref()));
            println!("  Updated:      {}", format_date(user.updated_at.as_ref()));
            Ok(())
        }
    }
}

fn print_users(users: &[User], footer: Option<&str>, format: OutputFormat) -> GtResult<()> {
    if format == OutputFormat::Json {
        return print_json(users);
    }
    if users.is_empty() {
        println!("No users.");
    } else {
        let mut table = new_table(["ID", "Login", "Name", "Email", "Admin", "Disabled"]);
        for u in users {
            table.add_row(vec![
                u.id.to_string(),
                u.login.clone(),
                or_dash(&u.name).to_string(),
                or_dash(&u.email).to_string(),
                yes_no(u.is_grafana_admin).to_string(),
                yes_no(u.is_disabled).to_string(),
            ]);
        }
        println!("{table}");
    }
    match footer {
        Some(footer) => println!("\n{footer}"),
        None => println!("\n{} user(s)", users.len()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_change_maps_to_permissions() {
        let grant = AdminChange {
            grant: true,
            revoke: false,
        };
        assert!(grant.permissions().is_grafana_admin);

        let revoke = AdminChange {
            grant: false,
            revoke: true,
        };
        assert!(!revoke.permissions().is_grafana_admin);
    }
}
