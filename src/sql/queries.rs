pub const SELECT_CROPS: &str = "SELECT crop_id, crop_name FROM crops ORDER BY crop_name";

pub const SELECT_DISTRICTS: &str = "SELECT district_id, name FROM districts ORDER BY name";

pub const SELECT_SUBDISTRICTS: &str =
    "SELECT subdistrict_id, name FROM subdistricts WHERE district_id = $1 ORDER BY name";

pub const SELECT_SOILS: &str = "SELECT soil_id, soil_name FROM soils ORDER BY soil_name";

pub const SELECT_SUITABLE_CROPS: &str = r#"
    SELECT c.crop_name
    FROM crops c
    JOIN crop_suitability cs ON c.crop_id = cs.crop_id
    WHERE cs.district_id = $1 AND cs.subdistrict_id = $2 AND cs.soil_id = $3
    ORDER BY c.crop_name
"#;

pub const INSERT_USER: &str = "INSERT INTO users (name, email, password_hash) VALUES ($1, $2, $3)";

pub const SELECT_USER_CREDENTIALS: &str = "SELECT id, password_hash FROM users WHERE email = $1";

pub const INSERT_ADVISORY: &str = r#"
    INSERT INTO advisories (crop_id, district_id, subdistrict_id, soil_id, severity)
    VALUES ($1, $2, $3, $4, $5)
"#;

pub const SELECT_ADVISORY_TEXT: &str =
    "SELECT advisory_text FROM crop_advisories WHERE crop_id = $1 AND severity = $2";

pub const INSERT_CONTACT_MESSAGE: &str =
    "INSERT INTO contact_messages (name, email, message) VALUES ($1, $2, $3)";
