
mod access_test;
mod certificate_test;
mod company_test;
mod router_test;
