use assert_cmd::Command;

pub fn hwtrack_cmd() -> Command {
    let mut cmd = Command::cargo_bin("hwtrack").unwrap();
    cmd.env_remove("HWTRACK_DB");
    cmd
}
