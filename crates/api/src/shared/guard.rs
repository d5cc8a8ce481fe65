use crate::error::EventhubError;
use eventhub_domain::ID;

pub struct Guard {}

impl Guard {
    pub fn against_malformed_id(val: &str) -> Result<ID, EventhubError> {
        val.parse()
            .map_err(|e| EventhubError::BadClientData(format!("{}", e)))
    }

    /// User ids are opaque, so a non blank id is passed through as given
    pub fn against_empty_user_id(user_id: &str) -> Result<String, EventhubError> {
        if user_id.trim().is_empty() {
            return Err(EventhubError::BadClientData(
                "The userId must not be empty".into(),
            ));
        }
        Ok(user_id.to_string())
    }

    /// Parses a non empty batch of event ids, dropping duplicates
    pub fn against_invalid_event_ids(event_ids: &[String]) -> Result<Vec<ID>, EventhubError> {
        if event_ids.is_empty() {
            return Err(EventhubError::BadClientData(
                "At least one event id must be given in eventIds".into(),
            ));
        }
        let mut ids: Vec<ID> = Vec::with_capacity(event_ids.len());
        for event_id in event_ids {
            let id = Self::against_malformed_id(event_id)?;
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_rejects_empty_user_id() {
        assert!(Guard::against_empty_user_id("").is_err());
        assert!(Guard::against_empty_user_id("  ").is_err());
    }

    #[test]
    fn it_keeps_user_id_as_given() {
        assert_eq!(
            Guard::against_empty_user_id(" user_2abc ").expect("To accept user id"),
            " user_2abc "
        );
    }

    #[test]
    fn it_rejects_empty_or_malformed_event_ids() {
        assert!(Guard::against_invalid_event_ids(&[]).is_err());
        assert!(Guard::against_invalid_event_ids(&["nope".to_string()]).is_err());
        let id = ID::new();
        assert!(Guard::against_invalid_event_ids(&[id.to_string(), "nope".into()]).is_err());
    }

    #[test]
    fn it_drops_duplicate_event_ids() {
        let id = ID::new();
        let other = ID::new();
        let ids = Guard::against_invalid_event_ids(&[
            id.to_string(),
            other.to_string(),
            id.to_string(),
        ])
        .expect("To accept event ids");
        assert_eq!(ids, vec![id, other]);
    }
}
