use assert_cmd::Command;

pub fn routine_cmd() -> Command {
    let mut cmd = Command::cargo_bin("morning-routine").unwrap();
    cmd.env_remove("MORNING_ROUTINE_CONFIG");
    cmd.env_remove("RUST_LOG");
    cmd
}

pub const AFFIRMATIONS: [&str; 5] = [
    "Jsem dost dobrý takový, jaký jsem.",
    "Každý malý krok se počítá.",
    "Dělám, co můžu, a to je dost.",
    "Mám právo být nedokonalý.",
    "Nejsem sám – každý občas tápe.",
];
