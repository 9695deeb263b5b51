use super::*;

fn users_columns() -> Vec<Column> {
    vec![
        Column::new("id", "BIGINT(20)").primary_key(),
        Column::new("name", "VARCHAR(100)")
            .with_length(100)
            .with_comment("display name"),
    ]
}

const USERS_MYSQL_DDL: &str = r#"CREATE TABLE `users` (
  `id` bigint(20) NOT NULL AUTO_INCREMENT,
  `name` varchar(100) DEFAULT NULL COMMENT 'display name',
  PRIMARY KEY (`id`)
) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4 COMMENT='users table'"#;

fn orders_columns() -> Vec<Column> {
    vec![
        Column::new("order_id", "BIGINT")
            .primary_key()
            .with_comment("order id"),
        Column::new("paid", "BOOLEAN"),
        Column::new("note", "STRING"),
    ]
}

const ORDERS_DORIS_DDL: &str = r#"CREATE TABLE `orders` (
  `order_id` BIGINT NOT NULL COMMENT 'order id',
  `paid` BOOLEAN NULL,
  `note` STRING NULL
) ENGINE=OLAP
UNIQUE KEY(`order_id`)
COMMENT 'orders table'
DISTRIBUTED BY HASH(`order_id`) BUCKETS 10
PROPERTIES (
"replication_num" = "1"
);"#;

#[test]
fn test_users_to_olap_end_to_end() {
    let ddl = to_olap_ddl("users", &users_columns(), USERS_MYSQL_DDL);
    println!("{ddl}");

    let expected = r#"CREATE TABLE `users` (
    `id` BIGINT,
    `name` VARCHAR(100) COMMENT 'display name'
) ENGINE = OLAP
UNIQUE KEY(id) COMMENT 'users table'
DISTRIBUTED BY HASH(id) BUCKETS 10
PROPERTIES (
    "replication_num" = "1",
    "enable_unique_key_merge_on_write" = "true"
);"#;
    assert_eq!(ddl, expected);
}

#[test]
fn test_tinyint_one_becomes_boolean() {
    let columns = vec![
        Column::new("id", "INT(11)").primary_key(),
        Column::new("enabled", "TINYINT(1)"),
        Column::new("deleted", "tinyint(1)"),
    ];
    let ddl = to_olap_ddl("flags", &columns, "");
    assert!(ddl.contains("`enabled` BOOLEAN"));
    assert!(ddl.contains("`deleted` BOOLEAN"));
    assert!(ddl.contains("`id` INT,"));
}

#[test]
fn test_olap_without_primary_key_falls_back_to_id() {
    let columns = vec![Column::new("code", "VARCHAR(10)"), Column::new("qty", "INT")];
    let ddl = to_olap_ddl("stock", &columns, "");
    assert!(ddl.contains("UNIQUE KEY(id) COMMENT 'stock'"));
    assert!(ddl.contains("DISTRIBUTED BY HASH(id) BUCKETS 10"));
}

#[test]
fn test_primary_keys_keep_input_order() {
    let columns = vec![
        Column::new("b", "INT").primary_key(),
        Column::new("a", "INT"),
        Column::new("c", "INT").primary_key(),
    ];
    let olap = to_olap_ddl("t", &columns, "");
    assert!(olap.contains("UNIQUE KEY(b, c)"));
    assert!(olap.contains("DISTRIBUTED BY HASH(b, c)"));

    let general = to_general_ddl("t", &columns, "");
    assert!(general.contains("PRIMARY KEY (`b`, `c`)"));
}

#[test]
fn test_general_primary_key_names_are_quoted() {
    let columns = vec![
        Column::new("order", "INT").primary_key(),
        Column::new("key", "VARCHAR(10)").primary_key(),
        Column::new("v", "INT"),
    ];
    let ddl = to_general_ddl("t", &columns, "");
    assert!(ddl.contains("    `v` INT NULL,\n    PRIMARY KEY (`order`, `key`)\n) ENGINE=InnoDB"));

    // OLAP 方向的键列保持原样
    let olap = to_olap_ddl("t", &columns, "");
    assert!(olap.contains("UNIQUE KEY(order, key)"));
}

#[test]
fn test_olap_comment_falls_back_to_table_name() {
    let ddl = to_olap_ddl("logs", &[Column::new("id", "BIGINT").primary_key()], "");
    assert!(ddl.contains("UNIQUE KEY(id) COMMENT 'logs'"));

    let ddl = to_olap_ddl(
        "logs",
        &[Column::new("id", "BIGINT").primary_key()],
        ") ENGINE=InnoDB COMMENT=''",
    );
    assert!(ddl.contains("COMMENT 'logs'"));
}

#[test]
fn test_olap_omits_empty_column_comment() {
    let columns = vec![Column::new("id", "BIGINT").primary_key().with_comment("")];
    let ddl = to_olap_ddl("t", &columns, "");
    assert!(ddl.contains("    `id` BIGINT\n) ENGINE = OLAP"));
}

#[test]
fn test_olap_with_zero_columns() {
    let ddl = to_olap_ddl("empty", &[], "");
    assert!(ddl.starts_with("CREATE TABLE `empty` (\n\n) ENGINE = OLAP"));
    assert!(ddl.ends_with(");"));
}

#[test]
fn test_orders_to_general() {
    let ddl = to_general_ddl("orders", &orders_columns(), ORDERS_DORIS_DDL);
    println!("{ddl}");

    let expected = r#"CREATE TABLE `orders` (
    `order_id` BIGINT NOT NULL COMMENT 'order id',
    `paid` TINYINT(1) NULL,
    `note` TEXT NULL,
    PRIMARY KEY (`order_id`)
) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4 COMMENT='orders table';"#;
    assert_eq!(ddl, expected);
}

#[test]
fn test_general_without_primary_key_omits_clause() {
    let columns = vec![Column::new("k", "STRING"), Column::new("v", "INT").nullable(false)];
    let ddl = to_general_ddl("kv", &columns, "");
    assert!(!ddl.contains("PRIMARY KEY"));
    assert_eq!(
        ddl,
        "CREATE TABLE `kv` (\n    `k` TEXT NULL,\n    `v` INT NOT NULL\n) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4;"
    );
}

#[test]
fn test_general_comment_ignores_sized_column_comments() {
    let raw = r#"CREATE TABLE `users` (
  `id` BIGINT NOT NULL,
  `name` VARCHAR(100) COMMENT 'display name'
) ENGINE=OLAP
UNIQUE KEY(`id`) COMMENT 'users table'
DISTRIBUTED BY HASH(`id`) BUCKETS 10"#;
    let ddl = to_general_ddl("users", &users_columns(), raw);
    assert!(ddl.ends_with("DEFAULT CHARSET=utf8mb4 COMMENT='users table';"));
    assert!(ddl.contains("`name` VARCHAR(100) NULL COMMENT 'display name'"));
}

#[test]
fn test_general_comment_may_come_from_column_when_unbalanced() {
    let columns = vec![
        Column::new("a", "VARCHAR(10)").with_comment("col a"),
        Column::new("b", "INT"),
    ];
    let raw = "CREATE TABLE `t` (\n  `a` VARCHAR(10) COMMENT 'col a',\n  `b` INT\nENGINE=OLAP";
    let ddl = to_general_ddl("t", &columns, raw);
    assert!(ddl.ends_with("DEFAULT CHARSET=utf8mb4 COMMENT='col a';"));

    let balanced =
        "CREATE TABLE `t` (\n  `a` VARCHAR(10) COMMENT 'col a',\n  `b` INT\n) ENGINE=OLAP";
    let ddl = to_general_ddl("t", &columns, balanced);
    assert!(ddl.ends_with("DEFAULT CHARSET=utf8mb4;"));
}

#[test]
fn test_general_with_zero_columns() {
    let ddl = to_general_ddl("empty", &[], "");
    assert_eq!(
        ddl,
        "CREATE TABLE `empty` (\n\n) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4;"
    );
}

#[test]
fn test_translator_uses_config() {
    let mut config = EngineConfig::default();
    config.olap.buckets = 16;
    config.olap.replication_num = 3;
    config.olap.merge_on_write = false;
    config.olap.fallback_key = "pk_id".to_string();
    config.general.charset = "utf8".to_string();

    let translator = DdlTranslator::new(config);
    let olap = translator.to_olap("t", &[Column::new("v", "INT")], "");
    assert!(olap.contains("UNIQUE KEY(pk_id)"));
    assert!(olap.contains("BUCKETS 16"));
    assert!(olap.contains("\"replication_num\" = \"3\""));
    assert!(olap.contains("\"enable_unique_key_merge_on_write\" = \"false\""));

    let general = translator.to_general("t", &[Column::new("v", "INT")], "");
    assert!(general.ends_with("ENGINE=InnoDB DEFAULT CHARSET=utf8;"));
}

struct FixedExtractor;

impl MetadataExtractor for FixedExtractor {
    fn detect(&self, _raw_ddl: &str) -> Dialect {
        Dialect::Olap
    }

    fn olap_table_comment(&self, _raw_ddl: &str) -> Option<String> {
        Some("fixed olap".to_string())
    }

    fn general_table_comment(&self, _raw_ddl: &str) -> Option<String> {
        Some("fixed general".to_string())
    }
}

#[test]
fn test_translator_with_custom_extractor() {
    let translator = DdlTranslator::with_extractor(EngineConfig::default(), FixedExtractor);
    let columns = vec![Column::new("id", "BIGINT").primary_key()];

    assert!(translator.to_olap("t", &columns, "").contains("COMMENT 'fixed olap'"));
    assert!(translator.to_general("t", &columns, "").contains("COMMENT='fixed general'"));

    let schema = TableSchema::new("t", columns, "ENGINE=InnoDB");
    assert_eq!(translator.convert_auto(&schema).direction, Direction::OlapToGeneral);
}

#[test]
fn test_convert_auto_picks_opposite_dialect() {
    let users = TableSchema::new("users", users_columns(), USERS_MYSQL_DDL);
    let conversion = convert_auto(&users);
    assert_eq!(conversion.direction, Direction::GeneralToOlap);
    assert!(conversion.ddl.contains("ENGINE = OLAP"));

    let orders = TableSchema::new("orders", orders_columns(), ORDERS_DORIS_DDL);
    let conversion = convert_auto(&orders);
    assert_eq!(conversion.direction, Direction::OlapToGeneral);
    assert!(conversion.ddl.contains("ENGINE=InnoDB"));
}

#[test]
fn test_convert_matches_free_functions() {
    let users = TableSchema::new("users", users_columns(), USERS_MYSQL_DDL);
    assert_eq!(
        convert(&users, Direction::GeneralToOlap),
        to_olap_ddl("users", &users.columns, &users.raw_ddl)
    );
    assert_eq!(
        convert(&users, Direction::OlapToGeneral),
        to_general_ddl("users", &users.columns, &users.raw_ddl)
    );
}

#[test]
fn test_direction_helpers() {
    assert_eq!(Direction::from_source(Dialect::General), Direction::GeneralToOlap);
    assert_eq!(Direction::to_target(Dialect::General), Direction::OlapToGeneral);
    assert_eq!(Direction::GeneralToOlap.target(), Dialect::Olap);
    assert_eq!(Direction::OlapToGeneral.source(), Dialect::Olap);
}

#[test]
fn test_translation_is_deterministic() {
    let a = to_olap_ddl("users", &users_columns(), USERS_MYSQL_DDL);
    let b = to_olap_ddl("users", &users_columns(), USERS_MYSQL_DDL);
    assert_eq!(a, b);
}

#[test]
fn test_batch_auto_direction() {
    let tables = vec![
        TableSchema::new("users", users_columns(), USERS_MYSQL_DDL),
        TableSchema::new("orders", orders_columns(), ORDERS_DORIS_DDL),
    ];
    let output = convert_batch(&tables, None);

    assert_eq!(output.table_count(), 2);
    assert_eq!(
        output.directions,
        vec![
            ("users".to_string(), Direction::GeneralToOlap),
            ("orders".to_string(), Direction::OlapToGeneral),
        ]
    );
    assert!(output.script.starts_with("-- Table: users\nCREATE TABLE `users` (\n"));
    assert!(output.script.contains(");\n\n-- Table: orders\nCREATE TABLE `orders` (\n"));
    assert!(output.script.ends_with("COMMENT='orders table';\n"));
}

#[test]
fn test_batch_fixed_direction() {
    let tables = vec![
        TableSchema::new("users", users_columns(), USERS_MYSQL_DDL),
        TableSchema::new("orders", orders_columns(), ORDERS_DORIS_DDL),
    ];
    let output = convert_batch(&tables, Some(Direction::GeneralToOlap));
    assert_eq!(output.script.matches("ENGINE = OLAP").count(), 2);
}

#[test]
fn test_batch_empty() {
    let output = convert_batch(&[], None);
    assert!(output.is_empty());
    assert_eq!(output.script, "");
}
