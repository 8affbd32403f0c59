/*!
# `REM <anything>`

## Purpose
A comment.

## Remarks
Everything after `REM` up to the end of the line is ignored,
including any `:`.

## Example
```text
10 REM Compute the area: width times height
20 PRINT 6*7:REM PRINT "NOT THIS"
RUN
42
```

*/
