//! Repository for the `household_members` table.

use assist_core::household::conditional_detail;
use assist_core::text::non_blank;
use assist_core::types::DbId;
use sqlx::{PgConnection, PgExecutor};

use crate::models::household_member::{HouseholdMember, HouseholdMemberInput};

/// Column list for household_members queries.
const COLUMNS: &str = "id, beneficiary_id, full_name, birth_date, relationship, education, \
    occupation, has_disability, disability_type, needs_diapers, diaper_size, created_at";

/// Provides read and whole-set replace operations for household members.
pub struct HouseholdRepo;

impl HouseholdRepo {
    /// Members of a beneficiary's household, in insertion order.
    pub async fn list_for_beneficiary(
        executor: impl PgExecutor<'_>,
        beneficiary_id: DbId,
    ) -> Result<Vec<HouseholdMember>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM household_members
             WHERE beneficiary_id = $1
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, HouseholdMember>(&query)
            .bind(beneficiary_id)
            .fetch_all(executor)
            .await
    }

    /// Delete the current household and insert `members` in its place.
    ///
    /// Run this inside a transaction; on its own a failure part-way would
    /// leave the household half written.
    pub async fn replace_for_beneficiary(
        conn: &mut PgConnection,
        beneficiary_id: DbId,
        members: &[HouseholdMemberInput],
    ) -> Result<Vec<HouseholdMember>, sqlx::Error> {
        sqlx::query("DELETE FROM household_members WHERE beneficiary_id = $1")
            .bind(beneficiary_id)
            .execute(&mut *conn)
            .await?;

        let query = format!(
            "INSERT INTO household_members
                (beneficiary_id, full_name, birth_date, relationship, education,
                 occupation, has_disability, disability_type, needs_diapers, diaper_size)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );

        let mut saved = Vec::with_capacity(members.len());
        for member in members {
            let row = sqlx::query_as::<_, HouseholdMember>(&query)
                .bind(beneficiary_id)
                .bind(member.full_name.trim())
                .bind(member.birth_date)
                .bind(non_blank(member.relationship.as_deref()))
                .bind(non_blank(member.education.as_deref()))
                .bind(non_blank(member.occupation.as_deref()))
                .bind(member.has_disability)
                .bind(conditional_detail(
                    member.has_disability,
                    member.disability_type.as_deref(),
                ))
                .bind(member.needs_diapers)
                .bind(conditional_detail(
                    member.needs_diapers,
                    member.diaper_size.as_deref(),
                ))
                .fetch_one(&mut *conn)
                .await?;
            saved.push(row);
        }
        Ok(saved)
    }
}
