use crate::error::{HeroError, HeroResult};
use crate::model::filter::{self, show_all};
use crate::model::{Job, Model};
use crate::parser::Index;

pub fn add_job(model: &mut dyn Model, job: Job) -> HeroResult<Job> {
    model.add_job(job.clone())?;
    Ok(job)
}

pub fn job_at(model: &dyn Model, index: Index) -> HeroResult<Job> {
    model
        .filtered_job_list()
        .get(index.zero_based())
        .map(|j| (*j).clone())
        .ok_or_else(|| HeroError::not_found("Job", format!("index {}", index)))
}

pub fn delete_job(model: &mut dyn Model, index: Index) -> HeroResult<Job> {
    let target = job_at(model, index)?;
    model.delete_job(&target)?;
    Ok(target)
}

pub fn find_jobs(model: &mut dyn Model, keywords: Vec<String>) -> usize {
    model.update_filtered_job_list(filter::job_title_contains_keywords(keywords));
    model.filtered_job_list().len()
}

pub fn list_jobs(model: &mut dyn Model) -> usize {
    model.update_filtered_job_list(show_all());
    model.filtered_job_list().len()
}
