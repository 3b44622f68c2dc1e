//! Mechanical Turk signing.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use awsign_core::Credential;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_should_sign_create_hit_with_formatted_timestamp() {
        let time = Utc.with_ymd_and_hms(2012, 2, 16, 20, 30, 47).unwrap();
        let timestamp = awsign_mturk::timestamp(time);

        let mut params = HashMap::new();
        awsign_mturk::sign(
            &Credential::new("user", "secret"),
            awsign_mturk::REQUESTER_SERVICE,
            "CreateHIT",
            &timestamp,
            &mut params,
        );
        assert_eq!(params["Signature"], "b/TnvzrdeD/L/EyzdFrznPXhido=");
    }

    #[test]
    fn test_should_ignore_access_key_and_token() {
        let sign_with = |cred: &Credential| {
            let mut params = HashMap::new();
            awsign_mturk::sign(cred, "S", "Op", "2012-02-16T20:30:47Z", &mut params);
            params.remove("Signature")
        };
        let plain = sign_with(&Credential::new("user", "secret"));
        let other = sign_with(&Credential::new("someone-else", "secret").with_token("tok"));
        assert_eq!(plain, other);
    }
}
