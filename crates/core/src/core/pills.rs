//! Department filter pills mirrored into the appointment form's select.

/// Outcome of clicking one pill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PillSelection {
    pub active: usize,
    /// Set when the pill's label names an option of the department select.
    pub department: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct PillGroup {
    labels: Vec<Option<String>>,
    active: Option<usize>,
}

impl PillGroup {
    pub const ACTIVE_CLASS: &'static str = "is-active";

    pub fn new(labels: Vec<Option<String>>) -> Self {
        Self {
            labels,
            active: None,
        }
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// Make `index` the only active pill and resolve the department option it
    /// maps to. Option texts are compared exactly.
    pub fn select<S: AsRef<str>>(&mut self, index: usize, options: &[S]) -> Option<PillSelection> {
        let label = self.labels.get(index)?;
        self.active = Some(index);
        let department = label
            .as_deref()
            .filter(|l| options.iter().any(|o| o.as_ref() == *l))
            .map(str::to_string);
        Some(PillSelection {
            active: index,
            department,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group() -> PillGroup {
        PillGroup::new(vec![
            Some("Cardiology".to_string()),
            Some("Pediatrics".to_string()),
            Some("Dental Care".to_string()),
            None,
        ])
    }

    #[test]
    fn selection_is_exclusive() {
        let mut g = group();
        let opts = ["Cardiology", "Pediatrics"];
        g.select(0, &opts);
        g.select(1, &opts);
        assert!(g.is_active(1));
        assert!(!g.is_active(0));
        assert_eq!(g.active(), Some(1));
    }

    #[test]
    fn maps_only_existing_options() {
        let mut g = group();
        let opts = ["Cardiology", "Pediatrics"];
        let sel = g.select(0, &opts).unwrap();
        assert_eq!(sel.department.as_deref(), Some("Cardiology"));

        let sel = g.select(2, &opts).unwrap();
        assert_eq!(sel.active, 2);
        assert_eq!(sel.department, None);

        let sel = g.select(3, &opts).unwrap();
        assert_eq!(sel.department, None);
    }

    #[test]
    fn match_is_exact() {
        let mut g = group();
        let sel = g.select(0, &["cardiology"]).unwrap();
        assert_eq!(sel.department, None);
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut g = group();
        assert!(g.select(10, &["Cardiology"]).is_none());
        assert_eq!(g.active(), None);
    }
}
