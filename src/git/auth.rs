//! Git authentication configuration
//!
//! Credentials are tried in this order:
//! - Credentials embedded in the repository URL by the caller (CI tokens)
//! - libgit2 default credentials
//! - SSH agent, then keys from ~/.ssh/
//! - Git credential helpers
//!
//! libgit2 keeps invoking the callback while the server rejects what it is
//! given, so the number of attempts is capped.

use git2::{Cred, CredentialType, Error, ErrorClass, ErrorCode, RemoteCallbacks};

use super::url::embedded_credentials;

const MAX_ATTEMPTS: usize = 4;

fn auth_error(message: &str) -> Error {
    Error::new(ErrorCode::Auth, ErrorClass::Http, message)
}

fn try_ssh_credentials(username: &str) -> Result<Cred, Error> {
    let home = dirs::home_dir().unwrap_or_default();
    let ssh_dir = home.join(".ssh");

    for key_name in &["id_ed25519", "id_rsa", "id_ecdsa"] {
        let private_key = ssh_dir.join(key_name);
        let public_key = ssh_dir.join(format!("{key_name}.pub"));

        if !private_key.exists() {
            continue;
        }

        let public_key_path = public_key.exists().then_some(public_key.as_path());

        if let Ok(cred) = Cred::ssh_key(username, public_key_path, &private_key, None) {
            return Ok(cred);
        }
    }

    Err(auth_error("SSH key not found"))
}

fn try_credential_helper(url: &str, username_from_url: Option<&str>) -> Result<Cred, Error> {
    let config = match git2::Config::open_default() {
        Ok(cfg) => cfg,
        Err(_) => git2::Config::new()?,
    };
    Cred::credential_helper(&config, url, username_from_url)
}

/// Set up authentication callbacks for the baseline clone of `repo_url`
pub fn setup_auth_callbacks(callbacks: &mut RemoteCallbacks, repo_url: &str) {
    let embedded = embedded_credentials(repo_url);
    let mut attempts = 0;

    callbacks.credentials(move |url, username_from_url, allowed_types| {
        attempts += 1;
        if attempts > MAX_ATTEMPTS {
            return Err(auth_error("authentication failed"));
        }

        if allowed_types.contains(CredentialType::USER_PASS_PLAINTEXT) {
            if let Some((user, password)) = &embedded {
                return Cred::userpass_plaintext(user, password);
            }
            return try_credential_helper(url, username_from_url);
        }

        if allowed_types.contains(CredentialType::DEFAULT) {
            return Cred::default();
        }

        if allowed_types.contains(CredentialType::SSH_KEY) {
            let username = username_from_url.unwrap_or("git");
            return Cred::ssh_key_from_agent(username).or_else(|_| try_ssh_credentials(username));
        }

        Err(auth_error("no supported authentication method"))
    });
}
