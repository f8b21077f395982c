use leptos::prelude::*;
use locker_types::{Role, User};

use crate::components::card::Card;

/// Head counts shown beside the user table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoleCounts {
    pub total: usize,
    pub admins: usize,
    pub moderators: usize,
    pub regular: usize,
}

impl RoleCounts {
    /// A user holding several roles counts once per role.
    pub fn tally(users: &[User]) -> Self {
        let count = |role: Role| users.iter().filter(|u| u.has_role(&role)).count();
        Self {
            total: users.len(),
            admins: count(Role::Admin),
            moderators: count(Role::Moderator),
            regular: count(Role::User),
        }
    }
}

#[component]
fn Stat(label: &'static str, value: usize) -> impl IntoView {
    view! {
        <div class="stat">
            <div class="stat-value">{value}</div>
            <div class="stat-label">{label}</div>
        </div>
    }
}

#[component]
pub fn UserTable(users: Vec<User>) -> impl IntoView {
    let counts = RoleCounts::tally(&users);

    view! {
        <Card title="User Management">
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Username"</th>
                        <th>"Email"</th>
                        <th>"Full Name"</th>
                        <th>"Mobile Number"</th>
                        <th>"Roles"</th>
                    </tr>
                </thead>
                <tbody>
                    {users
                        .into_iter()
                        .map(|user| {
                            view! {
                                <tr>
                                    <td>{user.id}</td>
                                    <td>{user.username.clone()}</td>
                                    <td>{user.email.clone()}</td>
                                    <td>{user.full_name.clone()}</td>
                                    <td>{user.mobile_number.clone()}</td>
                                    <td>{user.roles_label()}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </Card>
        <Card title="System Statistics">
            <div class="stat-grid">
                <Stat label="Total Users" value=counts.total />
                <Stat label="Admins" value=counts.admins />
                <Stat label="Moderators" value=counts.moderators />
                <Stat label="Regular Users" value=counts.regular />
            </div>
        </Card>
    }
}

#[component]
pub fn AdminPage() -> impl IntoView {
    #[allow(unused_variables)]
    let (users, setUsers) = signal(Option::<Result<Vec<User>, String>>::None);

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen_futures::spawn_local;

        spawn_local(async move {
            let result = async { crate::session::browser::api()?.users().list().await }
                .await
                .map_err(|e| format!("Failed to fetch users. {e}"));
            setUsers.set(Some(result));
        });
    }

    view! {
        <div class="dashboard-header">
            <h1>"Admin Dashboard"</h1>
            <p class="subtitle">"Registered accounts and their roles"</p>
        </div>
        {move || match users.get() {
            None => {
                view! {
                    <div class="loading">
                        <div class="spinner"></div>
                        "Loading users..."
                    </div>
                }
                    .into_any()
            }
            Some(Ok(list)) => view! { <UserTable users=list /> }.into_any(),
            Some(Err(e)) => view! { <div class="login-error">{e}</div> }.into_any(),
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, username: &str, roles: Vec<Role>) -> User {
        User {
            id,
            username: username.into(),
            email: format!("{username}@example.com"),
            full_name: username.to_uppercase(),
            mobile_number: "9876543210".into(),
            aadhaar_number: None,
            roles,
        }
    }

    #[test]
    fn tally_counts_each_role() {
        let users = vec![
            user(1, "root", vec![Role::Admin, Role::User]),
            user(2, "mod", vec![Role::Moderator]),
            user(3, "asha", vec![Role::User]),
            user(4, "ravi", vec![Role::User]),
        ];
        assert_eq!(
            RoleCounts::tally(&users),
            RoleCounts {
                total: 4,
                admins: 1,
                moderators: 1,
                regular: 3,
            }
        );
        assert_eq!(RoleCounts::tally(&[]), RoleCounts::default());
    }

    #[test]
    fn table_lists_users_with_roles() {
        let users = vec![user(1, "root", vec![Role::Admin, Role::User])];
        let html = Owner::new().with(|| view! { <UserTable users=users /> }.to_html());
        assert!(html.contains("root@example.com"));
        assert!(html.contains("ROLE_ADMIN, ROLE_USER"));
        assert!(html.contains("Regular Users"));
    }
}
