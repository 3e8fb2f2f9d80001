use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, sea_query::Expr,
};
use uuid::Uuid;

use plantdesk_access_schema::{profiles, role_assignments};
use plantdesk_domain::{id::UserId, profile::Profile, role::Role};

use crate::domain::repository::{ProfileRepository, RoleRepository};
use crate::domain::types::RoleAssignment;
use crate::error::AccessServiceError;

// ── Profile repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbProfileRepository {
    pub db: DatabaseConnection,
}

impl ProfileRepository for DbProfileRepository {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Profile>, AccessServiceError> {
        let model = profiles::Entity::find()
            .filter(profiles::Column::UserId.eq(user_id.as_str()))
            .one(&self.db)
            .await
            .context("find profile by user id")?;
        Ok(model.map(profile_from_model))
    }

    async fn list(&self) -> Result<Vec<Profile>, AccessServiceError> {
        let models = profiles::Entity::find()
            .order_by_asc(profiles::Column::Name)
            .all(&self.db)
            .await
            .context("list profiles")?;
        Ok(models.into_iter().map(profile_from_model).collect())
    }
}

fn profile_from_model(model: profiles::Model) -> Profile {
    Profile {
        id: model.id,
        user_id: UserId::from(model.user_id),
        name: model.name,
        is_active: model.is_active,
    }
}

// ── Role repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbRoleRepository {
    pub db: DatabaseConnection,
}

impl RoleRepository for DbRoleRepository {
    async fn find_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<RoleAssignment>, AccessServiceError> {
        let model = role_assignments::Entity::find()
            .filter(role_assignments::Column::UserId.eq(user_id.as_str()))
            .one(&self.db)
            .await
            .context("find role assignment by user id")?;
        model.map(assignment_from_model).transpose()
    }

    async fn insert(&self, user_id: &UserId, role: Role) -> Result<(), AccessServiceError> {
        let now = Utc::now();
        role_assignments::ActiveModel {
            id: Set(Uuid::now_v7()),
            user_id: Set(user_id.as_str().to_owned()),
            role: Set(role.as_str().to_owned()),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await
        .map_err(|e| {
            AccessServiceError::AssignFailed(
                anyhow::Error::new(e).context("insert role assignment"),
            )
        })?;
        Ok(())
    }

    async fn update_role(&self, user_id: &UserId, role: Role) -> Result<(), AccessServiceError> {
        // Single UPDATE keyed by user_id: row identity and created_at are
        // untouched, and no partial state is ever visible.
        role_assignments::Entity::update_many()
            .filter(role_assignments::Column::UserId.eq(user_id.as_str()))
            .col_expr(role_assignments::Column::Role, Expr::value(role.as_str()))
            .col_expr(role_assignments::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(&self.db)
            .await
            .map_err(|e| {
                AccessServiceError::UpdateFailed(
                    anyhow::Error::new(e).context("update role assignment"),
                )
            })?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<RoleAssignment>, AccessServiceError> {
        let models = role_assignments::Entity::find()
            .all(&self.db)
            .await
            .context("list role assignments")?;
        models.into_iter().map(assignment_from_model).collect()
    }
}

fn assignment_from_model(
    model: role_assignments::Model,
) -> Result<RoleAssignment, AccessServiceError> {
    // A persisted value outside the enumeration is an invariant violation,
    // not a request error.
    let role = Role::parse(&model.role).ok_or_else(|| {
        anyhow::anyhow!(
            "role assignment {} holds unknown role {:?}",
            model.id,
            model.role
        )
    })?;
    Ok(RoleAssignment {
        id: model.id,
        user_id: UserId::from(model.user_id),
        role,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}
