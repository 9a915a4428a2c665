use super::types::{Employee, EmployeeRole};
use std::rc::Rc;

/// Source of the roster shown on the sheet. The roster is static reference
/// data seeded at startup.
#[derive(Clone)]
pub struct RosterRepository {
    employees: Rc<Vec<Employee>>,
}

impl Default for RosterRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl RosterRepository {
    pub fn new() -> Self {
        Self::with_employees(seed_roster())
    }

    pub fn with_employees(employees: Vec<Employee>) -> Self {
        Self {
            employees: Rc::new(employees),
        }
    }

    pub fn employees(&self) -> Vec<Employee> {
        self.employees.as_ref().clone()
    }
}

fn seed_roster() -> Vec<Employee> {
    vec![
        Employee::new(
            "1",
            "aakashkumar prajapati",
            EmployeeRole::Admin,
            "AS",
            "bg-red-500",
        ),
        Employee::new(
            "2",
            "Akash Yadav",
            EmployeeRole::SiteSupervisor,
            "AY",
            "bg-orange-500",
        ),
        Employee::new(
            "3",
            "Kamlesh Prajapati",
            EmployeeRole::SiteSupervisor,
            "KP",
            "bg-red-500",
        ),
        Employee::new("4", "Nilesh Humbe", EmployeeRole::Admin, "NH", "bg-red-500"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_roster_ids_are_unique() {
        let roster = RosterRepository::new().employees();
        assert_eq!(roster.len(), 4);
        let ids: HashSet<&str> = roster.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), roster.len());
    }
}
