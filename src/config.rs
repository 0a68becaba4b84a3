// Where access requests end up. Baked in at build time; deployments
// override it by setting LUNE_CONTACT_EMAIL when compiling.
pub fn admin_contact_address() -> &'static str {
    match option_env!("LUNE_CONTACT_EMAIL") {
        Some(address) => address,
        None => "jeff.levinson@gmail.com",
    }
}

pub fn github_url() -> &'static str {
    "https://github.com/besjet17/LuneCapital"
}
