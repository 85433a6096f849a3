//! Establishment directory models.

use jiff::Timestamp;
use rustc_hash::FxHashMap;

use crate::domain::establishments::records::{
    EmployeeRecord, EstablishmentRecord, EstablishmentUuid,
};

/// Owner contact shown next to an establishment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Owner {
    pub name: String,
    pub email: String,
}

/// An establishment joined with its employee aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstablishmentOverview {
    pub uuid: EstablishmentUuid,
    pub name: String,
    pub address: Option<String>,
    pub default_currency: String,
    pub created_at: Timestamp,
    pub employee_count: usize,
    pub owner: Option<Owner>,
}

/// Directory-wide totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DirectorySummary {
    pub establishments: usize,
    pub employees: usize,
}

impl DirectorySummary {
    #[must_use]
    pub fn from_overviews(overviews: &[EstablishmentOverview]) -> Self {
        Self {
            establishments: overviews.len(),
            employees: overviews.iter().map(|overview| overview.employee_count).sum(),
        }
    }
}

/// Join establishments with their employees, preserving establishment order.
///
/// Employees of establishments absent from `establishments` are ignored. The
/// owner is the first employee, in input order, carrying the owner role.
#[must_use]
pub fn build_directory(
    establishments: Vec<EstablishmentRecord>,
    employees: &[EmployeeRecord],
) -> Vec<EstablishmentOverview> {
    let mut by_establishment: FxHashMap<EstablishmentUuid, (usize, Option<&EmployeeRecord>)> =
        establishments
            .iter()
            .map(|establishment| (establishment.uuid, (0, None)))
            .collect();

    for employee in employees {
        if let Some((count, owner)) = by_establishment.get_mut(&employee.establishment_uuid) {
            *count += 1;

            if owner.is_none() && employee.is_owner() {
                *owner = Some(employee);
            }
        }
    }

    establishments
        .into_iter()
        .map(|establishment| {
            let (employee_count, owner) = by_establishment
                .get(&establishment.uuid)
                .copied()
                .unwrap_or((0, None));

            EstablishmentOverview {
                uuid: establishment.uuid,
                name: establishment.name,
                address: establishment.address,
                default_currency: establishment.default_currency,
                created_at: establishment.created_at,
                employee_count,
                owner: owner.map(|employee| Owner {
                    name: employee.full_name.clone(),
                    email: employee.email.clone(),
                }),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::domain::establishments::records::EmployeeUuid;

    use super::*;

    fn establishment(name: &str) -> EstablishmentRecord {
        EstablishmentRecord {
            uuid: EstablishmentUuid::new(),
            name: name.to_owned(),
            address: None,
            default_currency: "RUB".to_owned(),
            created_at: Timestamp::UNIX_EPOCH,
        }
    }

    fn employee(establishment: EstablishmentUuid, name: &str, roles: &[&str]) -> EmployeeRecord {
        EmployeeRecord {
            uuid: EmployeeUuid::new(),
            full_name: name.to_owned(),
            email: format!("{}@example.test", name.to_lowercase()),
            roles: roles.iter().map(|role| (*role).to_owned()).collect(),
            establishment_uuid: establishment,
        }
    }

    #[test]
    fn counts_employees_and_picks_first_owner() {
        let cafe = establishment("Cafe");
        let employees = vec![
            employee(cafe.uuid, "Cook", &["cook"]),
            employee(cafe.uuid, "Anna", &["manager", "owner"]),
            employee(cafe.uuid, "Boris", &["owner"]),
        ];

        let directory = build_directory(vec![cafe], &employees);

        assert_eq!(directory.len(), 1);
        assert_eq!(directory[0].employee_count, 3);
        assert_eq!(
            directory[0].owner,
            Some(Owner {
                name: "Anna".to_owned(),
                email: "anna@example.test".to_owned(),
            })
        );
    }

    #[test]
    fn establishment_without_employees_has_no_owner() {
        let directory = build_directory(vec![establishment("Empty")], &[]);

        assert_eq!(directory[0].employee_count, 0);
        assert_eq!(directory[0].owner, None);
    }

    #[test]
    fn preserves_establishment_order() {
        let newest = establishment("Newest");
        let oldest = establishment("Oldest");

        let directory = build_directory(vec![newest, oldest], &[]);

        let names: Vec<_> = directory.iter().map(|overview| overview.name.as_str()).collect();

        assert_eq!(names, ["Newest", "Oldest"]);
    }

    #[test]
    fn employees_of_unseen_establishments_are_ignored() {
        let known = establishment("Known");
        let created_after_snapshot = EstablishmentUuid::new();

        let employees = vec![
            employee(known.uuid, "Staff", &["waiter"]),
            employee(created_after_snapshot, "Ghost", &["owner"]),
        ];

        let directory = build_directory(vec![known], &employees);

        assert_eq!(directory.len(), 1);
        assert_eq!(directory[0].employee_count, 1);
        assert_eq!(directory[0].owner, None);
    }

    #[test]
    fn owner_missing_from_employee_snapshot_stays_unset() {
        let cafe = establishment("Cafe");
        let snapshot = vec![employee(cafe.uuid, "Cook", &["cook"])];

        let mut current = snapshot.clone();
        current.push(employee(cafe.uuid, "Owner", &["owner"]));

        let stale = build_directory(vec![cafe.clone()], &snapshot);
        let fresh = build_directory(vec![cafe], &current);

        assert_eq!(stale[0].owner, None);
        assert_eq!(
            fresh[0].owner.as_ref().map(|owner| owner.name.as_str()),
            Some("Owner")
        );
    }

    #[test]
    fn summary_totals_the_directory() {
        let first = establishment("First");
        let second = establishment("Second");
        let employees = vec![
            employee(first.uuid, "A", &[]),
            employee(first.uuid, "B", &[]),
            employee(second.uuid, "C", &[]),
        ];

        let summary = DirectorySummary::from_overviews(&build_directory(
            vec![first, second],
            &employees,
        ));

        assert_eq!(
            summary,
            DirectorySummary {
                establishments: 2,
                employees: 3,
            }
        );
    }
}
