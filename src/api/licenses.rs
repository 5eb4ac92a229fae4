use log::info;
use reqwest::Method;

use crate::api::error::Error;
use crate::api::types::license_key::{
    ActivateLicenseParams, DeactivateLicenseParams, LicenseKeyInstance, ValidateLicenseParams,
    ValidateLicenseResponse,
};
use crate::api::utils::require_non_blank;
use crate::api::DodoAPI;

/// License activation, meant to be called from distributed software
#[derive(Debug, Clone, Copy)]
pub struct Licenses<'a> {
    api: &'a DodoAPI,
}

impl<'a> Licenses<'a> {
    pub(crate) fn new(api: &'a DodoAPI) -> Self {
        Licenses { api }
    }

    /// Activates a license key and returns the new instance
    pub async fn activate(
        &self,
        params: &ActivateLicenseParams,
    ) -> Result<LicenseKeyInstance, Error> {
        require_non_blank("license_key", &params.license_key)?;
        require_non_blank("name", &params.name)?;
        let rb = self
            .api
            .request(Method::POST, &["licenses", "activate"])?
            .json(params);
        let instance: LicenseKeyInstance = self.api.send(rb).await?;
        info!("Activated license instance {}", instance.id);
        Ok(instance)
    }

    /// Releases an activated instance
    pub async fn deactivate(&self, params: &DeactivateLicenseParams) -> Result<(), Error> {
        require_non_blank("license_key", &params.license_key)?;
        require_non_blank("license_key_instance_id", &params.license_key_instance_id)?;
        let rb = self
            .api
            .request(Method::POST, &["licenses", "deactivate"])?
            .json(params);
        self.api.send_empty(rb).await
    }

    /// Checks whether a key, and optionally an instance, is valid
    pub async fn validate(&self, params: &ValidateLicenseParams) -> Result<bool, Error> {
        require_non_blank("license_key", &params.license_key)?;
        let rb = self
            .api
            .request(Method::POST, &["licenses", "validate"])?
            .json(params);
        let response: ValidateLicenseResponse = self.api.send(rb).await?;
        Ok(response.valid)
    }
}
