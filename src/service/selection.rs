//! Role selection component backing a view's dropdown.
//!
//! A `RoleSelection` holds the candidate roles of one view message and applies member
//! selections to their roles. It starts either unbound (showing a loading option until
//! the first interaction pulls roles from its role source) or seeded from a live role
//! snapshot by the publish and restore paths.

use std::{collections::HashMap, sync::Arc};

use crate::{
    error::{selection::SelectionError, transport::TransportError},
    model::{
        role::GuildRole,
        selection::{
            MutationError, ViewMenu, MenuOption, SelectionOutcome, LOADING_VALUE,
            MAX_MENU_OPTIONS, NO_ROLES_VALUE,
        },
        view::{SelectionPolicy, ViewKind},
    },
    service::{
        role_filter::candidates_for,
        transport::{GuildDirectory, MemberRoles},
    },
};

enum Candidates {
    /// Roles have not been loaded since the component was created.
    Unbound,
    Bound {
        by_id: HashMap<u64, GuildRole>,
        ordered: Vec<GuildRole>,
    },
}

pub struct RoleSelection {
    kind: ViewKind,
    guild_id: u64,
    message_id: u64,
    candidates: Candidates,
    menu: ViewMenu,
    role_source: Option<Arc<dyn GuildDirectory>>,
}

impl RoleSelection {
    /// Creates an unbound component showing a single loading option.
    ///
    /// # Arguments
    /// - `kind` - View kind deciding the filter and selection policy
    /// - `guild_id` - Guild the view belongs to
    /// - `message_id` - Message the view is attached to
    /// - `role_source` - Where to load roles from on first use; `None` leaves the component
    ///   unable to refresh
    pub fn new(
        kind: ViewKind,
        guild_id: u64,
        message_id: u64,
        role_source: Option<Arc<dyn GuildDirectory>>,
    ) -> Self {
        let menu = ViewMenu {
            custom_id: kind.custom_id(),
            placeholder: kind.placeholder().to_string(),
            options: vec![MenuOption::new("Loading...", LOADING_VALUE)],
            min_values: 1,
            max_values: 1,
            disabled: false,
        };

        Self {
            kind,
            guild_id,
            message_id,
            candidates: Candidates::Unbound,
            menu,
            role_source,
        }
    }

    /// Creates a component bound to the candidates derived from a role snapshot.
    pub fn seeded(
        kind: ViewKind,
        guild_id: u64,
        message_id: u64,
        guild_roles: &[GuildRole],
        role_source: Option<Arc<dyn GuildDirectory>>,
    ) -> Self {
        let mut selection = Self::new(kind, guild_id, message_id, role_source);
        selection.update_roles(guild_roles);
        selection
    }

    #[cfg(test)]
    pub fn kind(&self) -> ViewKind {
        self.kind
    }

    pub fn guild_id(&self) -> u64 {
        self.guild_id
    }

    pub fn message_id(&self) -> u64 {
        self.message_id
    }

    /// Select menu reflecting the current candidates.
    pub fn menu(&self) -> &ViewMenu {
        &self.menu
    }

    /// Candidate roles in display order; empty while unbound.
    pub fn candidates(&self) -> &[GuildRole] {
        match &self.candidates {
            Candidates::Unbound => &[],
            Candidates::Bound { ordered, .. } => ordered,
        }
    }

    #[cfg(test)]
    pub fn is_bound(&self) -> bool {
        matches!(self.candidates, Candidates::Bound { .. })
    }

    /// Replaces the candidates with those the kind's filter selects from `guild_roles`.
    ///
    /// The menu shows at most 25 options, but every filtered role stays a candidate so
    /// exclusive selections still remove roles beyond the rendered ones.
    pub fn update_roles(&mut self, guild_roles: &[GuildRole]) {
        let ordered = candidates_for(self.kind, guild_roles);
        let by_id = ordered
            .iter()
            .map(|role| (role.id, role.clone()))
            .collect::<HashMap<_, _>>();

        self.menu = build_menu(self.kind, &ordered);
        self.candidates = Candidates::Bound { by_id, ordered };
    }

    /// Reloads candidates from the role source.
    ///
    /// # Returns
    /// - `Ok(())` - Candidates replaced with the guild's current roles
    /// - `Err(SelectionError::RefreshUnavailable)` - No role source was provided
    /// - `Err(SelectionError::RefreshFailed)` - The role source failed
    pub async fn refresh(&mut self) -> Result<(), SelectionError> {
        let source = self
            .role_source
            .clone()
            .ok_or(SelectionError::RefreshUnavailable)?;

        let roles = source
            .list_roles(self.guild_id)
            .await
            .map_err(SelectionError::RefreshFailed)?;

        self.update_roles(&roles);

        tracing::debug!(
            "Loaded {} candidate roles for view message {} in guild {}",
            self.candidates().len(),
            self.message_id,
            self.guild_id
        );

        Ok(())
    }

    /// Applies a member's dropdown selection to their roles.
    ///
    /// Candidates are loaded first if none are present. Exclusive kinds swap the member's
    /// held candidate roles for the selected one, or report it as already held without
    /// touching roles. The toggle kind removes selected roles the member holds and adds the
    /// rest. Failed role mutations are reported in the outcome rather than returned as
    /// errors, and are not rolled back.
    ///
    /// # Arguments
    /// - `members` - Role mutation collaborator
    /// - `member_id` - Member who used the dropdown
    /// - `member_role_ids` - Roles the member held when the interaction was created
    /// - `selected` - Values submitted by the dropdown
    ///
    /// # Returns
    /// - `Ok(SelectionOutcome)` - Roles added, removed or already held, and any failures
    /// - `Err(SelectionError::NoValidSelection)` - No candidates exist, or the selection is
    ///   empty or contains values that are not candidates
    /// - `Err(SelectionError::RefreshUnavailable | RefreshFailed)` - Candidates could not be
    ///   loaded
    pub async fn on_select(
        &mut self,
        members: &dyn MemberRoles,
        member_id: u64,
        member_role_ids: &[u64],
        selected: &[String],
    ) -> Result<SelectionOutcome, SelectionError> {
        if self.candidates().is_empty() {
            self.refresh().await?;
        }

        let selected = self.resolve_selection(selected)?;

        let outcome = match self.kind.policy() {
            SelectionPolicy::Exclusive => {
                self.apply_exclusive(members, member_id, member_role_ids, &selected[0])
                    .await
            }
            SelectionPolicy::Toggle => {
                apply_toggle(self.guild_id, members, member_id, member_role_ids, selected).await
            }
        };

        Ok(outcome)
    }

    /// Maps submitted values to candidate roles, rejecting placeholders and unknown ids.
    fn resolve_selection(&self, selected: &[String]) -> Result<Vec<GuildRole>, SelectionError> {
        let Candidates::Bound { by_id, .. } = &self.candidates else {
            return Err(SelectionError::NoValidSelection);
        };

        if by_id.is_empty() || selected.is_empty() {
            return Err(SelectionError::NoValidSelection);
        }

        let mut roles: Vec<GuildRole> = Vec::with_capacity(selected.len());
        for value in selected {
            if MenuOption::is_sentinel_value(value) {
                return Err(SelectionError::NoValidSelection);
            }

            let role = value
                .parse::<u64>()
                .ok()
                .and_then(|id| by_id.get(&id))
                .ok_or(SelectionError::NoValidSelection)?;

            if !roles.contains(role) {
                roles.push(role.clone());
            }
        }

        Ok(roles)
    }

    async fn apply_exclusive(
        &self,
        members: &dyn MemberRoles,
        member_id: u64,
        member_role_ids: &[u64],
        selected: &GuildRole,
    ) -> SelectionOutcome {
        let mut outcome = SelectionOutcome::default();

        if member_role_ids.contains(&selected.id) {
            outcome.already_held = Some(selected.clone());
            return outcome;
        }

        let held: Vec<GuildRole> = self
            .candidates()
            .iter()
            .filter(|role| member_role_ids.contains(&role.id))
            .cloned()
            .collect();

        if !held.is_empty() {
            let ids: Vec<u64> = held.iter().map(|role| role.id).collect();
            match members.remove_roles(self.guild_id, member_id, &ids).await {
                Ok(()) => outcome.removed = held,
                Err(err) => {
                    tracing::warn!(
                        "Failed to remove roles {:?} from member {} in guild {}: {}",
                        ids,
                        member_id,
                        self.guild_id,
                        err
                    );
                    // Adding now could leave the member with two roles of the set.
                    outcome.errors.push(mutation_error(err));
                    return outcome;
                }
            }
        }

        match members
            .add_roles(self.guild_id, member_id, &[selected.id])
            .await
        {
            Ok(()) => outcome.added.push(selected.clone()),
            Err(err) => {
                tracing::warn!(
                    "Failed to add role {} to member {} in guild {}: {}",
                    selected.id,
                    member_id,
                    self.guild_id,
                    err
                );
                outcome.errors.push(mutation_error(err));
            }
        }

        outcome
    }
}

async fn apply_toggle(
    guild_id: u64,
    members: &dyn MemberRoles,
    member_id: u64,
    member_role_ids: &[u64],
    selected: Vec<GuildRole>,
) -> SelectionOutcome {
    let mut outcome = SelectionOutcome::default();

    let (to_remove, to_add): (Vec<GuildRole>, Vec<GuildRole>) = selected
        .into_iter()
        .partition(|role| member_role_ids.contains(&role.id));

    if !to_remove.is_empty() {
        let ids: Vec<u64> = to_remove.iter().map(|role| role.id).collect();
        match members.remove_roles(guild_id, member_id, &ids).await {
            Ok(()) => outcome.removed = to_remove,
            Err(err) => {
                tracing::warn!(
                    "Failed to remove roles {:?} from member {} in guild {}: {}",
                    ids,
                    member_id,
                    guild_id,
                    err
                );
                outcome.errors.push(mutation_error(err));
            }
        }
    }

    if !to_add.is_empty() {
        let ids: Vec<u64> = to_add.iter().map(|role| role.id).collect();
        match members.add_roles(guild_id, member_id, &ids).await {
            Ok(()) => outcome.added = to_add,
            Err(err) => {
                tracing::warn!(
                    "Failed to add roles {:?} to member {} in guild {}: {}",
                    ids,
                    member_id,
                    guild_id,
                    err
                );
                outcome.errors.push(mutation_error(err));
            }
        }
    }

    outcome
}

fn mutation_error(err: TransportError) -> MutationError {
    match err {
        TransportError::Forbidden => MutationError::PermissionDenied,
        other => MutationError::TransportFailure(other.to_string()),
    }
}

fn build_menu(kind: ViewKind, candidates: &[GuildRole]) -> ViewMenu {
    let mut menu = ViewMenu {
        custom_id: kind.custom_id(),
        placeholder: kind.placeholder().to_string(),
        options: Vec::new(),
        min_values: 1,
        max_values: 1,
        disabled: false,
    };

    if candidates.is_empty() {
        menu.options
            .push(MenuOption::new("No roles available", NO_ROLES_VALUE));
        menu.disabled = true;
        return menu;
    }

    menu.options = candidates
        .iter()
        .take(MAX_MENU_OPTIONS)
        .map(|role| MenuOption::new(role.name.clone(), role.id.to_string()))
        .collect();

    if kind.policy() == SelectionPolicy::Toggle {
        menu.max_values = menu.options.len() as u8;
    }

    menu
}
